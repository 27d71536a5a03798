//! Lightweight UI state management with one bitfield.
//!
//! Each constant is one toggle; a `u64` word holds up to 64 of them.

use flag_field::{Bitfield, FlagError};

const DARK_MODE: u64 = 1;
const MOBILE_MENU: u64 = 1 << 1;
const MODAL_OPEN: u64 = 1 << 2;
const USER_LOGGED_IN: u64 = 1 << 3;
const ERROR_BANNER: u64 = 1 << 4;
const FILTER_PANEL: u64 = 1 << 5;

fn main() -> Result<(), FlagError> {
    let mut ui = Bitfield::new();

    // toggles can be set one at a time or as a combined mask
    ui.set(DARK_MODE | MODAL_OPEN | USER_LOGGED_IN)?;
    println!("after login: {ui}");

    if ui.get(DARK_MODE)? {
        println!("dark mode is on");
    }

    ui.set(MOBILE_MENU | FILTER_PANEL)?;
    ui.delete(MODAL_OPEN | ERROR_BANNER)?;
    println!("after closing the modal: {ui}");

    ui.delete(DARK_MODE | MOBILE_MENU | MODAL_OPEN | USER_LOGGED_IN | FILTER_PANEL)?;
    println!("after reset: {ui}");

    Ok(())
}
