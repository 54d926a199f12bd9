/// fontls-core: The tidy census-taker of installed fonts
///
/// Ask a host graphics subsystem who lives there, font-wise, and it answers
/// like an over-eager tour guide: every family once per weight,
/// vertical-writing doppelgangers with `@` pinned to their names, and - on
/// CJK locales - full names with a style suffix written in the host's own
/// script. This library takes that raw roll call and returns the guest list
/// you would actually put in a font menu: decoded, filtered, deduplicated,
/// sorted.
///
/// ## The Pipeline, In Order Of Appearance
///
/// **Query**: [`enumerate::FamilyQuery`] describes what the host should
/// report - a broad charset selector by default, so no script is left out.
///
/// **Enumeration**: [`enumerate::FamilySource`] is the seam between this
/// crate and the host service. On Windows the `gdi` implementation drives
/// `EnumFontFamiliesExA`; in tests a scripted source plays the host.
///
/// **Decoding**: [`record::FontlsFamilyRecord`] carries each record's raw
/// legacy-encoded bytes and decodes them on request, falling back to
/// best-effort text rather than ever dropping a record.
///
/// **Normalization**: [`normalize`] keeps regular-weight families, drops
/// vertical pseudo-fonts, and trims native-script style suffixes so that
/// "宋体 Regular" and "宋体" collapse into one entry.
///
/// **Collection**: [`enumerate::FamilyCollector`] deduplicates and hands
/// back an ascending sorted list, identical for any delivery order.
///
/// ## A Sample Conversation
///
/// ```rust,no_run
/// use fontls_core::enumerate::{list_families, ListOptions};
///
/// let families = list_families(&ListOptions::default())?;
/// for family in families {
///     println!("{family}");
/// }
/// #
/// # Ok::<(), fontls_core::error::EnumerateError>(())
/// ```
///
/// ## House Rules
///
/// - Every call is a fresh enumeration; nothing is cached in between.
/// - Only failures to reach the host service abort a call. A record whose
///   bytes refuse to decode still shows up, best effort.
/// - The whole pipeline is synchronous and single-threaded; the host
///   callback runs strictly inside the one enumeration call that armed it.
///
/// ---
///
/// Crafted with care at FontLab https://www.fontlab.com/

pub mod enumerate;
pub mod error;
pub mod normalize;
pub mod output;
pub mod record;

#[cfg(windows)]
pub mod gdi;
