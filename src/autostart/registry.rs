//! `HKEY_CURRENT_USER` `Run` key backed by the Windows registry.

use super::run_key::{RUN_KEY_PATH, ValueStore};
use std::io;
use winreg::RegKey;
use winreg::enums::{HKEY_CURRENT_USER, KEY_READ, KEY_SET_VALUE};

/// The current user's `Run` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentUserRunKey;

impl ValueStore for CurrentUserRunKey {
    fn location(&self) -> String {
        format!(r"HKEY_CURRENT_USER\{}", RUN_KEY_PATH)
    }

    fn read_values(&self) -> io::Result<Vec<(String, String)>> {
        let key = RegKey::predef(HKEY_CURRENT_USER).open_subkey_with_flags(RUN_KEY_PATH, KEY_READ)?;

        let mut values = Vec::new();
        for item in key.enum_values() {
            let (name, _) = item?;
            // Non-string values (binary, DWORD) are not launch commands.
            if let Ok(data) = key.get_value::<String, _>(&name) {
                values.push((name, data));
            }
        }
        Ok(values)
    }

    fn write_value(&self, name: &str, data: &str) -> io::Result<()> {
        let (key, _) = RegKey::predef(HKEY_CURRENT_USER).create_subkey(RUN_KEY_PATH)?;
        key.set_value(name, &data.to_string())
    }

    fn delete_value(&self, name: &str) -> io::Result<()> {
        let key =
            RegKey::predef(HKEY_CURRENT_USER).open_subkey_with_flags(RUN_KEY_PATH, KEY_SET_VALUE)?;
        key.delete_value(name)
    }
}
