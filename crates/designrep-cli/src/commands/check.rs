//! Catalog sweeps: verify every stored realization in one pass.

use std::process::exit;

use designrep_catalog::{
    CoverBlocks, CoverName, CwName, CwmCatalog, DesignName, DiffSetCatalog, SignedCatalog,
};

use crate::support::{EXIT_ERROR, EXIT_FAILED, ok_or_exit, read_file_or_exit};

struct Sweep {
    checked: usize,
    failures: Vec<String>,
}

impl Sweep {
    fn new() -> Self {
        Self {
            checked: 0,
            failures: Vec::new(),
        }
    }

    fn record(&mut self, label: String, verdict: bool) {
        self.checked += 1;
        if !verdict {
            self.failures.push(label);
        }
    }

    fn report(self, source: &str, json: bool) -> ! {
        let passed = self.checked - self.failures.len();
        if json {
            let payload = serde_json::json!({
                "source": source,
                "checked": self.checked,
                "passed": passed,
                "failures": self.failures,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).expect("json serialization")
            );
        } else {
            println!("{source}: {passed}/{} realizations verified", self.checked);
            for label in &self.failures {
                println!("  FAILED {label}");
            }
        }
        exit(if self.failures.is_empty() {
            0
        } else {
            EXIT_FAILED
        });
    }
}

pub fn run(family: String, catalog: String, json: bool) {
    let document = read_file_or_exit(&catalog);
    let mut sweep = Sweep::new();

    match family.as_str() {
        "ds" => {
            let catalog = ok_or_exit(DiffSetCatalog::from_json_str(&document));
            let names: Vec<String> = catalog.names().map(str::to_string).collect();
            for key in names {
                let name: DesignName = ok_or_exit(key.parse());
                let count = catalog.get(&name).map_or(0, |r| r.num_sets());
                for i in 0..count {
                    let verdict = ok_or_exit(catalog.verify_realization(&name, i));
                    sweep.record(format!("{key} realization {i}"), verdict);
                }
            }
        }
        "sds" => {
            let catalog = ok_or_exit(SignedCatalog::from_json_str(&document));
            let names: Vec<String> = catalog.names().map(str::to_string).collect();
            for key in names {
                let name: DesignName = ok_or_exit(key.parse());
                let count = catalog.get(&name).map_or(0, |r| r.num_sets());
                for i in 0..count {
                    let verdict = ok_or_exit(catalog.verify_realization(&name, i));
                    sweep.record(format!("{key} realization {i}"), verdict);
                }
            }
        }
        "cw" => {
            let catalog = ok_or_exit(CwmCatalog::from_json_str(&document));
            let names: Vec<String> = catalog.names().map(str::to_string).collect();
            for key in names {
                let name: CwName = ok_or_exit(key.parse());
                let count = catalog.get(&name).map_or(0, |r| r.num_sets());
                for i in 0..count {
                    let verdict = ok_or_exit(catalog.verify_realization(&name, i));
                    sweep.record(format!("{key} realization {i}"), verdict);
                }
            }
        }
        other => {
            eprintln!("error: unknown family {other:?} (expected ds, sds, or cw)");
            exit(EXIT_ERROR);
        }
    }

    sweep.report(&catalog, json);
}

pub fn run_cover(blocks: String, json: bool) {
    let store = ok_or_exit(CoverBlocks::from_json_str(&read_file_or_exit(&blocks)));
    let mut sweep = Sweep::new();
    let names: Vec<String> = store.names().map(str::to_string).collect();
    for key in names {
        let name: CoverName = ok_or_exit(key.parse());
        let verdict = ok_or_exit(store.verify(&name));
        sweep.record(key, verdict);
    }
    sweep.report(&blocks, json);
}
