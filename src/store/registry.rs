//! Windows Registry Store
//!
//! Backend over `HKEY_LOCAL_MACHINE` using the ANSI registry API. This is
//! the store the LTFS mounting service reads, so it is the default on
//! Windows. Writing under HKLM requires an elevated process.

use crate::error::{LtfsConfigError, Result};
use crate::store::{ConfigStore, Value};
use std::ffi::CString;
use std::ptr;
use tracing::debug;

use winapi::shared::minwindef::{DWORD, HKEY};
use winapi::shared::winerror::{ERROR_FILE_NOT_FOUND, ERROR_SUCCESS};
use winapi::um::winnt::{KEY_CREATE_SUB_KEY, KEY_READ, KEY_SET_VALUE, REGSAM, REG_DWORD, REG_SZ};
use winapi::um::winreg::{
    RegCloseKey, RegCreateKeyExA, RegDeleteKeyA, RegOpenKeyExA, RegQueryValueExA, RegSetValueExA,
    HKEY_LOCAL_MACHINE,
};

/// Open registry key that closes itself on every exit path.
struct KeyHandle(HKEY);

impl Drop for KeyHandle {
    fn drop(&mut self) {
        unsafe {
            RegCloseKey(self.0);
        }
    }
}

pub struct RegistryStore {
    root: HKEY,
}

impl RegistryStore {
    /// Store rooted at `HKEY_LOCAL_MACHINE`, where the product installer
    /// and the mounting service expect the LTFS keys.
    pub fn local_machine() -> Self {
        Self {
            root: HKEY_LOCAL_MACHINE,
        }
    }

    fn open_key(&self, path: &str, access: REGSAM) -> Result<KeyHandle> {
        let sub_key = key_path(path)?;
        let mut handle: HKEY = ptr::null_mut();

        let status =
            unsafe { RegOpenKeyExA(self.root, sub_key.as_ptr(), 0, access, &mut handle) };

        if status == ERROR_SUCCESS as i32 {
            Ok(KeyHandle(handle))
        } else if status == ERROR_FILE_NOT_FOUND as i32 {
            Err(LtfsConfigError::record_not_found(path))
        } else {
            Err(LtfsConfigError::store_unavailable(format!(
                "RegOpenKeyEx({}) failed with status {}",
                path, status
            )))
        }
    }
}

impl ConfigStore for RegistryStore {
    fn open(&self, path: &str) -> Result<()> {
        self.open_key(path, KEY_READ).map(|_| ())
    }

    fn create_or_open(&mut self, path: &str) -> Result<()> {
        let sub_key = key_path(path)?;
        let mut handle: HKEY = ptr::null_mut();

        let status = unsafe {
            RegCreateKeyExA(
                self.root,
                sub_key.as_ptr(),
                0,
                ptr::null_mut(),
                0,
                KEY_READ | KEY_CREATE_SUB_KEY | KEY_SET_VALUE,
                ptr::null_mut(),
                &mut handle,
                ptr::null_mut(),
            )
        };

        if status != ERROR_SUCCESS as i32 {
            return Err(LtfsConfigError::store_unavailable(format!(
                "RegCreateKeyEx({}) failed with status {}",
                path, status
            )));
        }

        // Only the side effect is needed here; the guard closes the key.
        let _key = KeyHandle(handle);
        debug!("Opened registry key: {}", path);
        Ok(())
    }

    fn delete(&mut self, path: &str) -> Result<()> {
        let sub_key = key_path(path)?;

        let status = unsafe { RegDeleteKeyA(self.root, sub_key.as_ptr()) };

        if status == ERROR_SUCCESS as i32 {
            debug!("Deleted registry key: {}", path);
            Ok(())
        } else if status == ERROR_FILE_NOT_FOUND as i32 {
            Err(LtfsConfigError::record_not_found(path))
        } else {
            Err(LtfsConfigError::store_unavailable(format!(
                "RegDeleteKey({}) failed with status {}",
                path, status
            )))
        }
    }

    fn read_field(&self, path: &str, name: &str) -> Result<Value> {
        let key = self.open_key(path, KEY_READ)?;
        let value_name = value_name(path, name).map_err(LtfsConfigError::read_failed)?;

        // Size and type probe first; the data call follows with an
        // exactly-sized buffer. Truncation is never silent.
        let mut value_type: DWORD = 0;
        let mut size: DWORD = 0;

        let status = unsafe {
            RegQueryValueExA(
                key.0,
                value_name.as_ptr(),
                ptr::null_mut(),
                &mut value_type,
                ptr::null_mut(),
                &mut size,
            )
        };

        if status == ERROR_FILE_NOT_FOUND as i32 {
            return Err(LtfsConfigError::read_failed(format!(
                "no value named {} under {}",
                name, path
            )));
        }
        if status != ERROR_SUCCESS as i32 {
            return Err(LtfsConfigError::read_failed(format!(
                "RegQueryValueEx({}\\{}) failed with status {}",
                path, name, status
            )));
        }

        match value_type {
            REG_SZ => {
                if size == 0 {
                    return Ok(Value::Str(String::new()));
                }

                let mut buffer = vec![0u8; size as usize];
                let status = unsafe {
                    RegQueryValueExA(
                        key.0,
                        value_name.as_ptr(),
                        ptr::null_mut(),
                        &mut value_type,
                        buffer.as_mut_ptr(),
                        &mut size,
                    )
                };

                if status != ERROR_SUCCESS as i32 {
                    return Err(LtfsConfigError::read_failed(format!(
                        "RegQueryValueEx({}\\{}) failed with status {}",
                        path, name, status
                    )));
                }

                buffer.truncate(size as usize);
                let text = String::from_utf8_lossy(&buffer)
                    .trim_end_matches('\0')
                    .to_string();
                Ok(Value::Str(text))
            }
            REG_DWORD => {
                let mut data: DWORD = 0;
                let mut size = std::mem::size_of::<DWORD>() as DWORD;
                let status = unsafe {
                    RegQueryValueExA(
                        key.0,
                        value_name.as_ptr(),
                        ptr::null_mut(),
                        &mut value_type,
                        &mut data as *mut DWORD as *mut u8,
                        &mut size,
                    )
                };

                if status != ERROR_SUCCESS as i32 {
                    return Err(LtfsConfigError::read_failed(format!(
                        "RegQueryValueEx({}\\{}) failed with status {}",
                        path, name, status
                    )));
                }

                Ok(Value::Dword(data))
            }
            other => Err(LtfsConfigError::read_failed(format!(
                "{}\\{} has unsupported value type {}",
                path, name, other
            ))),
        }
    }

    fn write_field(&mut self, path: &str, name: &str, value: Value) -> Result<()> {
        let key = self.open_key(path, KEY_SET_VALUE)?;
        let value_name = value_name(path, name).map_err(LtfsConfigError::write_failed)?;

        let status = match value {
            Value::Str(text) => {
                let data = CString::new(text).map_err(|e| {
                    LtfsConfigError::write_failed(format!(
                        "{}\\{} contains an interior NUL: {}",
                        path, name, e
                    ))
                })?;
                let bytes = data.as_bytes_with_nul();
                unsafe {
                    RegSetValueExA(
                        key.0,
                        value_name.as_ptr(),
                        0,
                        REG_SZ,
                        bytes.as_ptr(),
                        bytes.len() as DWORD,
                    )
                }
            }
            Value::Dword(data) => unsafe {
                RegSetValueExA(
                    key.0,
                    value_name.as_ptr(),
                    0,
                    REG_DWORD,
                    &data as *const DWORD as *const u8,
                    std::mem::size_of::<DWORD>() as DWORD,
                )
            },
        };

        if status != ERROR_SUCCESS as i32 {
            return Err(LtfsConfigError::write_failed(format!(
                "RegSetValueEx({}\\{}) failed with status {}",
                path, name, status
            )));
        }

        debug!("Wrote registry value: {}\\{}", path, name);
        Ok(())
    }
}

fn key_path(path: &str) -> Result<CString> {
    CString::new(path).map_err(|e| {
        LtfsConfigError::store_unavailable(format!("key path contains an interior NUL: {}", e))
    })
}

fn value_name(path: &str, name: &str) -> std::result::Result<CString, String> {
    CString::new(name).map_err(|e| {
        format!(
            "{}\\{}: value name contains an interior NUL: {}",
            path, name, e
        )
    })
}
