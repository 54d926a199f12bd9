//! Win32 GDI host service (made by FontLab https://www.fontlab.com/)
//!
//! `gdi32.dll` and its `EnumFontFamiliesExA` export are resolved at
//! runtime, once, so a host missing either reports a clean error instead
//! of failing at process start. The A-variant is deliberate: its records
//! carry the locale's legacy-encoded bytes that the record decoder knows
//! how to handle.

use std::os::raw::{c_char, c_int};
use std::ptr;
use std::sync::OnceLock;

use winapi::shared::minwindef::{DWORD, LPARAM};
use winapi::shared::windef::HDC;
use winapi::um::libloaderapi::{GetProcAddress, LoadLibraryW};
use winapi::um::wingdi::{ENUMLOGFONTEXA, LOGFONTA, TEXTMETRICA};
use winapi::um::winuser::{GetDC, ReleaseDC};

use crate::enumerate::{FamilyQuery, FamilySource};
use crate::error::EnumerateError;
use crate::record::FontlsFamilyRecord;

const LIBRARY_NAME: &str = "gdi32.dll";
const ENTRY_POINT_NAME: &str = "EnumFontFamiliesExA";

type FamilyEnumProc =
    unsafe extern "system" fn(*const LOGFONTA, *const TEXTMETRICA, DWORD, LPARAM) -> c_int;

type EnumFontFamiliesExAFn =
    unsafe extern "system" fn(HDC, *mut LOGFONTA, Option<FamilyEnumProc>, LPARAM, DWORD) -> c_int;

static ENTRY_POINT: OnceLock<Result<usize, EnumerateError>> = OnceLock::new();

/// Resolve the enumeration entry point, loading the library on first use.
fn entry_point() -> Result<EnumFontFamiliesExAFn, EnumerateError> {
    let resolved = ENTRY_POINT.get_or_init(|| {
        let wide: Vec<u16> = LIBRARY_NAME.encode_utf16().chain(Some(0)).collect();
        let library = unsafe { LoadLibraryW(wide.as_ptr()) };
        if library.is_null() {
            return Err(EnumerateError::LibraryUnavailable(LIBRARY_NAME.to_string()));
        }

        let symbol = unsafe { GetProcAddress(library, b"EnumFontFamiliesExA\0".as_ptr().cast()) };
        if symbol.is_null() {
            return Err(EnumerateError::EntryPointUnavailable(
                ENTRY_POINT_NAME.to_string(),
            ));
        }

        Ok(symbol as usize)
    });

    resolved
        .clone()
        .map(|addr| unsafe { std::mem::transmute::<usize, EnumFontFamiliesExAFn>(addr) })
}

/// Screen device context held for exactly one enumeration call.
struct ScreenDc(HDC);

impl ScreenDc {
    fn acquire() -> Result<Self, EnumerateError> {
        let hdc = unsafe { GetDC(ptr::null_mut()) };
        if hdc.is_null() {
            return Err(EnumerateError::DeviceContextUnavailable);
        }
        Ok(Self(hdc))
    }
}

impl Drop for ScreenDc {
    fn drop(&mut self) {
        unsafe {
            ReleaseDC(ptr::null_mut(), self.0);
        }
    }
}

struct VisitState<'a> {
    visit: &'a mut dyn FnMut(&FontlsFamilyRecord) -> bool,
}

/// Reinterpret a `CHAR` buffer as bytes.
fn as_bytes(field: &[c_char]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(field.as_ptr().cast(), field.len()) }
}

unsafe extern "system" fn on_family(
    logfont: *const LOGFONTA,
    _metrics: *const TEXTMETRICA,
    _font_type: DWORD,
    lparam: LPARAM,
) -> c_int {
    // EnumFontFamiliesExA delivers the extended record; the base LOGFONTA
    // pointer is its first field.
    let extended = &*(logfont as *const ENUMLOGFONTEXA);
    let state = &mut *(lparam as *mut VisitState);

    let record = FontlsFamilyRecord::from_raw(
        as_bytes(&extended.elfLogFont.lfFaceName),
        &extended.elfStyle,
        extended.elfLogFont.lfCharSet,
    );

    if (state.visit)(&record) {
        1
    } else {
        0
    }
}

/// Host service backed by GDI family enumeration.
#[derive(Debug, Default)]
pub struct GdiFamilySource;

impl GdiFamilySource {
    pub fn new() -> Self {
        Self
    }
}

impl FamilySource for GdiFamilySource {
    fn for_each_family(
        &self,
        query: &FamilyQuery,
        visit: &mut dyn FnMut(&FontlsFamilyRecord) -> bool,
    ) -> Result<(), EnumerateError> {
        let enum_families = entry_point()?;
        let dc = ScreenDc::acquire()?;

        let mut filter: LOGFONTA = unsafe { std::mem::zeroed() };
        filter.lfCharSet = query.charset();

        let mut state = VisitState { visit };
        unsafe {
            enum_families(
                dc.0,
                &mut filter,
                Some(on_family),
                &mut state as *mut VisitState as LPARAM,
                0,
            );
        }

        Ok(())
    }
}
