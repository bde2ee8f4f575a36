/// Bounds on the text the parser accepts
///
/// The parser recurses once per nested group, negation and right operand, so
/// the depth bound is what keeps hostile input from exhausting the stack. It
/// bounds both the formula's own nesting and the parentheses around it.
///
/// The length bound applies to the text handed to the parser. A canonical
/// rendering spends up to four bytes more per connective than bare input, so
/// reparsing a rendering close to the limit needs a limit of its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum length of a single formula in bytes
    /// Real usage: ~20 bytes, Limit: 4KB
    pub max_formula_bytes: usize,

    /// Maximum connective nesting, and maximum parenthesis nesting
    /// Real usage: ~5 levels, Limit: 256
    pub max_nesting_depth: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_formula_bytes: 4 * 1024,
            max_nesting_depth: 256,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
