use designrep_catalog::{
    CoverBlocks, CoverName, CwName, CwmCatalog, DesignName, DiffSetCatalog, SignedCatalog,
};

use crate::support::{ok_or_exit, parse_name_or_exit, read_file_or_exit, report_verdict};

pub fn run_ds(name: String, catalog: String, index: usize, json: bool) {
    let parsed: DesignName = parse_name_or_exit(&name);
    let catalog = ok_or_exit(DiffSetCatalog::from_json_str(&read_file_or_exit(&catalog)));
    let verdict = ok_or_exit(catalog.verify_realization(&parsed, index));
    report_verdict(&parsed.to_string(), Some(index), verdict, json);
}

pub fn run_sds(name: String, catalog: String, index: usize, json: bool) {
    let parsed: DesignName = parse_name_or_exit(&name);
    let catalog = ok_or_exit(SignedCatalog::from_json_str(&read_file_or_exit(&catalog)));
    let verdict = ok_or_exit(catalog.verify_realization(&parsed, index));
    report_verdict(&parsed.to_string(), Some(index), verdict, json);
}

pub fn run_cw(name: String, catalog: String, index: usize, json: bool) {
    let parsed: CwName = parse_name_or_exit(&name);
    let catalog = ok_or_exit(CwmCatalog::from_json_str(&read_file_or_exit(&catalog)));
    let verdict = ok_or_exit(catalog.verify_realization(&parsed, index));
    report_verdict(&parsed.to_string(), Some(index), verdict, json);
}

pub fn run_cover(name: String, blocks: String, json: bool) {
    let parsed: CoverName = parse_name_or_exit(&name);
    let store = ok_or_exit(CoverBlocks::from_json_str(&read_file_or_exit(&blocks)));
    let verdict = ok_or_exit(store.verify(&parsed));
    report_verdict(&parsed.to_string(), None, verdict, json);
}
