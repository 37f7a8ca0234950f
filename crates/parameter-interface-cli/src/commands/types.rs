//! Types command - list registered type names.

use parameter_interface::TypeRegistry;

pub fn run() -> anyhow::Result<()> {
    for name in TypeRegistry::builtin().names() {
        println!("{name}");
    }
    Ok(())
}
