//! Text utilities: annotated message lines for the chat display.

mod segments;

pub(crate) use segments::annotated_lines;

#[cfg(test)]
mod tests;
