// Parsing of zikr content markup
//
// The input is a single string which may contain:
// - poems enclosed by "F" ... "X", one verse per line, hemistichs split by "__"
// - headings ("## title")
// - numbered lines ("3. item", "3/4. item")
// - inline ﴾…﴿ (Qur'anic quotation), [^1] (footnote), [source: 12] (citation),
//   [instruction], […], (…), «…»
//
// Parsing never fails: anything outside the format becomes Paragraph / PlainText.

pub mod block;
pub mod block_parser;
mod poem;
pub mod renderer;
pub mod segment;
pub mod tokenizer;
