//! Browser launching
//!
//! The only job here is handing a resolved URL to the platform's opener.
//! The child is spawned and left alone, the browser outlives this process.

use std::io;
use std::process::Command;

/// Open a URL with the platform's default handler
#[cfg(target_os = "linux")]
pub fn open_browser(url: &str) -> io::Result<()> {
    Command::new("xdg-open").arg(url).spawn().map(|_| ())
}

/// Open a URL with the platform's default handler
#[cfg(target_os = "macos")]
pub fn open_browser(url: &str) -> io::Result<()> {
    Command::new("open").arg(url).spawn().map(|_| ())
}

/// Open a URL with the platform's default handler
#[cfg(target_os = "windows")]
pub fn open_browser(url: &str) -> io::Result<()> {
    Command::new("rundll32")
        .arg("url.dll,FileProtocolHandler")
        .arg(url)
        .spawn()
        .map(|_| ())
}

/// Open a URL with the platform's default handler
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn open_browser(_url: &str) -> io::Result<()> {
    Err(io::Error::other("unsupported platform"))
}
