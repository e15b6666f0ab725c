#![no_main]
use coretrace::state::{MAX_MODULES, ModuleTable, parse_module_list};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let mut table = ModuleTable::new();
    for name in parse_module_list(data) {
        table.insert(name);
        assert!(table.contains(name) || table.len() == MAX_MODULES);
    }
    assert!(table.len() <= MAX_MODULES);
    assert!(table.iter().all(ModuleTable::is_valid_name));
});
