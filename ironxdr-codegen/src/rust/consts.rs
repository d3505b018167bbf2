//! Constant declaration emission.

use ironxdr_registry::{ConstantTable, to_constant_case};

/// Emitter for the constant block of the generated module.
pub struct ConstEmitter<'a> {
    constants: &'a ConstantTable,
}

impl<'a> ConstEmitter<'a> {
    /// Creates a new constant emitter.
    #[must_use]
    pub fn new(constants: &'a ConstantTable) -> Self {
        Self { constants }
    }

    /// Generates one declaration per table entry, in table order.
    ///
    /// Names are transformed to constant case; no sorting and no
    /// deduplication happen here.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for (name, value) in self.constants.iter() {
            output.push_str(&format!(
                "#[allow(dead_code)]\npub const {}: i32 = {};\n",
                to_constant_case(name),
                value
            ));
        }

        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_keeps_table_order() {
        let mut table = ConstantTable::new();
        table.push("FOO", 1);
        table.push("BAR", 2);

        let output = ConstEmitter::new(&table).generate();
        let foo = output.find("pub const FOO: i32 = 1;").unwrap();
        let bar = output.find("pub const BAR: i32 = 2;").unwrap();
        assert!(foo < bar, "FOO must precede BAR despite alphabetical order");
    }

    #[test]
    fn test_generate_applies_constant_case() {
        let mut table = ConstantTable::new();
        table.push("maxOpsPerTx", 100);

        let output = ConstEmitter::new(&table).generate();
        assert!(output.contains("pub const MAX_OPS_PER_TX: i32 = 100;"));
        assert!(output.contains("#[allow(dead_code)]"));
    }

    #[test]
    fn test_generate_emits_duplicates_verbatim() {
        let mut table = ConstantTable::new();
        table.push("LIMIT", 1);
        table.push("LIMIT", 2);

        let output = ConstEmitter::new(&table).generate();
        assert_eq!(output.matches("pub const LIMIT: i32 =").count(), 2);
    }

    #[test]
    fn test_generate_empty_table() {
        let table = ConstantTable::new();
        assert_eq!(ConstEmitter::new(&table).generate(), "\n");
    }

    #[test]
    fn test_negative_values_render_signed() {
        let mut table = ConstantTable::new();
        table.push("txFailed", -1);

        let output = ConstEmitter::new(&table).generate();
        assert!(output.contains("pub const TX_FAILED: i32 = -1;"));
    }
}
