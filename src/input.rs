/// The lexer module recognises radix and numeral lines.
///
/// Each grammar is a logos token type. A line is valid only when it lexes to
/// a single token spanning the whole line, so partial matches such as `37` or
/// `01` are rejected.
pub mod lexer;
/// The request module turns three lines of input into a validated
/// conversion request.
///
/// # Responsibilities
/// - Reads the source radix, the numeral and the target radix, in that order.
/// - Reports the first malformed line with its line number.
/// - Hands the validated request to a converter.
pub mod request;
