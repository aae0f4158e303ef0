//! Generate the identifier-header enumerations (priority, source, destination).
use super::domain::*;
use super::errors::*;
use super::name_helpers::*;
use super::type_helpers::*;

use std::fmt::Write;

/// Iterate over the schema lookups and emit the corresponding Rust code.
pub(crate) fn run_lookup_gen(config: &IoConfig) -> Result<String, BuildError> {
    let mut buffer_lookup_code = String::new();

    for lookup in &config.lookups {
        buffer_lookup_code.push_str(&generate_lookup_code(lookup)?);
    }

    Ok(buffer_lookup_code)
}

//==================================================================================LOOKUP_ENUM_GENERATION
/// Generate the full Rust code for a lookup enumeration (type plus helpers).
fn generate_lookup_code(lookup: &LookupEnum) -> Result<String, BuildError> {
    let mut buffer = String::new();
    let enum_name = lookup.type_name();
    let enum_repr = generate_repr_attribute(lookup.max_value());
    let variants: Vec<(String, &EnumValues)> = lookup
        .values
        .iter()
        .map(|v| (to_pascal_case(&v.name), v))
        .collect();

    //======================Enum generation
    writeln!(buffer, "/// `{}` values packed into the CAN identifier header.", lookup.name)?;
    writeln!(buffer, "#[repr({})]", enum_repr)?;
    writeln!(buffer, "#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]")?;
    writeln!(
        buffer,
        "#[cfg_attr(feature = \"defmt\", derive(defmt::Format))]"
    )?;
    writeln!(buffer, "pub enum {} {{", enum_name)?;
    for (variant, v) in &variants {
        writeln!(buffer, "\t{} = {},", variant, v.value)?;
    }
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    //======================Conversions
    writeln!(buffer, "#[derive(Debug, PartialEq, Eq)]")?;
    writeln!(buffer, "pub struct Invalid{}(pub {});", enum_name, enum_repr)?;
    writeln!(buffer)?;
    writeln!(buffer, "impl From<{}> for {} {{", enum_name, enum_repr)?;
    writeln!(buffer, "\tfn from(value: {}) -> Self {{", enum_name)?;
    writeln!(buffer, "\t\tvalue as {}", enum_repr)?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;
    writeln!(buffer, "impl TryFrom<{}> for {} {{", enum_repr, enum_name)?;
    writeln!(buffer, "\ttype Error = Invalid{};", enum_name)?;
    writeln!(
        buffer,
        "\tfn try_from(value: {}) -> Result<Self, Self::Error> {{",
        enum_repr
    )?;
    writeln!(buffer, "\t\tmatch value {{")?;
    for (variant, v) in &variants {
        writeln!(buffer, "\t\t\t{} => Ok({}::{}),", v.value, enum_name, variant)?;
    }
    writeln!(buffer, "\t\t\tother => Err(Invalid{}(other)),", enum_name)?;
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    //======================Helpers
    if let Some((default_variant, _)) = variants.first() {
        writeln!(buffer, "impl Default for {} {{", enum_name)?;
        writeln!(buffer, "\tfn default() -> Self {{")?;
        writeln!(buffer, "\t\tSelf::{}", default_variant)?;
        writeln!(buffer, "\t}}")?;
        writeln!(buffer, "}}")?;
        writeln!(buffer)?;
    }

    writeln!(buffer, "impl {} {{", enum_name)?;
    writeln!(buffer, "\t/// Identifier bits reserved for this field.")?;
    writeln!(buffer, "\tpub const BITS: u32 = {};", lookup.bits)?;
    writeln!(buffer, "\t/// Every declared variant, in schema order.")?;
    writeln!(
        buffer,
        "\tpub const ALL: [{}; {}] = [",
        enum_name,
        variants.len()
    )?;
    for (variant, _) in &variants {
        writeln!(buffer, "\t\t{}::{},", enum_name, variant)?;
    }
    writeln!(buffer, "\t];")?;
    writeln!(buffer)?;
    writeln!(buffer, "\t/// Schema name of the variant.")?;
    writeln!(buffer, "\tpub const fn name(&self) -> &'static str {{")?;
    writeln!(buffer, "\t\tmatch self {{")?;
    for (variant, v) in &variants {
        writeln!(buffer, "\t\t\tSelf::{} => {:?},", variant, v.name)?;
    }
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    Ok(buffer)
}
