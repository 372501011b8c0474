use once_cell::sync::OnceCell;
use regex::Regex;

/// Stack initialization prepended to every program as line 0. Label
/// targets are recorded relative to it, so it must come first.
pub static PROLOGUE: &str = "addi $sp,$sp,-1";

/// Header token expected by the instruction memory loader.
pub static IMAGE_HEADER: &str = "v2.0 raw";

/// Minimum textual width of a listing line and of a hex word.
pub const MIN_WIDTH: usize = 5;

static LABEL_REGEX: OnceCell<Regex> = OnceCell::new();
static LABEL_REGEX_PATTERN: &str = r"^(?P<name>[^\s:]+):$";

static MEM_REGEX: OnceCell<Regex> = OnceCell::new();
static MEM_REGEX_PATTERN: &str = r"^(?P<offset>-?\d+)\((?P<reg>\$\w+)\)$";

pub fn label_regex() -> &'static Regex {
    LABEL_REGEX.get_or_init(|| Regex::new(LABEL_REGEX_PATTERN).expect("Invalid label regex"))
}

pub fn mem_regex() -> &'static Regex {
    MEM_REGEX.get_or_init(|| Regex::new(MEM_REGEX_PATTERN).expect("Invalid mem regex"))
}
