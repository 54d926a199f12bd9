use fontls_core::enumerate::{collect_families, FamilyQuery, FamilySource, ListOptions};
use fontls_core::error::EnumerateError;
use fontls_core::normalize::NormalizeOptions;
use fontls_core::record::FontlsFamilyRecord;

struct ScriptedSource {
    records: Vec<FontlsFamilyRecord>,
}

impl ScriptedSource {
    fn new(entries: &[(&[u8], &[u8])]) -> Self {
        Self {
            records: entries
                .iter()
                .map(|(face, style)| FontlsFamilyRecord::from_raw(face, style, 1))
                .collect(),
        }
    }
}

impl FamilySource for ScriptedSource {
    fn for_each_family(
        &self,
        _query: &FamilyQuery,
        visit: &mut dyn FnMut(&FontlsFamilyRecord) -> bool,
    ) -> Result<(), EnumerateError> {
        for record in &self.records {
            if !visit(record) {
                break;
            }
        }
        Ok(())
    }
}

struct UnreachableHost(EnumerateError);

impl FamilySource for UnreachableHost {
    fn for_each_family(
        &self,
        _query: &FamilyQuery,
        _visit: &mut dyn FnMut(&FontlsFamilyRecord) -> bool,
    ) -> Result<(), EnumerateError> {
        Err(self.0.clone())
    }
}

#[test]
fn composed_filters_match_expected_scenario() {
    let source = ScriptedSource::new(&[
        (b"Arial", b"Regular"),
        (b"Arial", b"Bold"),
        (b"@Arial", b"Regular"),
        (b"\xcb\xce\xcc\xe5 Regular", b"Regular"), // "宋体 Regular" in GBK
    ]);

    let families = collect_families(&source, &ListOptions::default()).expect("collect");
    assert_eq!(families, vec!["Arial".to_string(), "宋体".to_string()]);
}

#[test]
fn delivery_order_does_not_change_output() {
    let entries: &[(&[u8], &[u8])] = &[
        (b"Tahoma", b"Regular"),
        (b"Arial", b"Regular"),
        (b"Courier New", b"Regular"),
    ];
    let mut reversed: Vec<(&[u8], &[u8])> = entries.to_vec();
    reversed.reverse();

    let opts = ListOptions::default();
    let forward = collect_families(&ScriptedSource::new(entries), &opts).expect("collect");
    let backward = collect_families(&ScriptedSource::new(&reversed), &opts).expect("collect");

    assert_eq!(forward, backward);
    assert_eq!(forward, vec!["Arial", "Courier New", "Tahoma"]);
}

#[test]
fn duplicate_records_collapse() {
    let source = ScriptedSource::new(&[
        (b"Arial", b"Regular"),
        (b"Arial", b"Regular"),
        (b"Arial", b"Regular"),
    ]);

    let families = collect_families(&source, &ListOptions::default()).expect("collect");
    assert_eq!(families, vec!["Arial"]);
}

#[test]
fn style_filter_is_configurable() {
    let source = ScriptedSource::new(&[(b"Courier", b"Bold")]);

    let regular_only = collect_families(&source, &ListOptions::default()).expect("collect");
    assert!(regular_only.is_empty());

    let all_styles = ListOptions {
        normalize: NormalizeOptions {
            regular_only: false,
        },
        ..ListOptions::default()
    };
    let kept = collect_families(&source, &all_styles).expect("collect");
    assert_eq!(kept, vec!["Courier"]);
}

#[test]
fn unreachable_host_is_fatal_with_no_partial_result() {
    let source = UnreachableHost(EnumerateError::EntryPointUnavailable(
        "EnumFontFamiliesExA".to_string(),
    ));

    let result = collect_families(&source, &ListOptions::default());
    assert_eq!(
        result,
        Err(EnumerateError::EntryPointUnavailable(
            "EnumFontFamiliesExA".to_string()
        ))
    );
}

#[test]
fn bad_record_does_not_taint_good_ones() {
    let source = ScriptedSource::new(&[
        (b"Arial", b"Regular"),
        (b"\xff\xfe", b"Regular"), // not valid GBK; decoder falls back
        (b"Tahoma", b"Regular"),
    ]);

    let families = collect_families(&source, &ListOptions::default()).expect("collect");
    assert_eq!(families.len(), 3);
    assert!(families.contains(&"Arial".to_string()));
    assert!(families.contains(&"Tahoma".to_string()));
}

#[test]
fn empty_host_yields_empty_list() {
    let source = ScriptedSource::new(&[]);
    let families = collect_families(&source, &ListOptions::default()).expect("collect");
    assert!(families.is_empty());
}

#[test]
fn sources_honor_early_stop() {
    let source = ScriptedSource::new(&[(b"One", b"Regular"), (b"Two", b"Regular")]);

    let mut seen = 0;
    source
        .for_each_family(&FamilyQuery::new(), &mut |_| {
            seen += 1;
            false
        })
        .expect("enumerate");

    assert_eq!(seen, 1);
}
