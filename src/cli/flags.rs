#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub output: Option<String>,
}
