//! Host System Adapters.
//!
//! - `ProcessShell` - opener and shell child processes
//! - `LocalFileFinder` - recursive file name search
//! - `XdotoolDesktop` - keyboard, mouse and window control on X11
//! - `WhatsappMessenger` - WhatsApp Desktop through UI automation

mod local_file_finder;
mod process_shell;
mod whatsapp_messenger;
mod xdotool_desktop;

pub use local_file_finder::LocalFileFinder;
pub use process_shell::{ProcessShell, ShellCommands};
pub use whatsapp_messenger::{ScreenPoint, WhatsappFlow, WhatsappMessenger};
pub use xdotool_desktop::XdotoolDesktop;
