/// One separator-delimited item of a declaration body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BlockItem {
    /// 0-based index of the line the item starts on.
    pub line: usize,
    pub text: String,
}

#[derive(Debug)]
pub(crate) struct Block {
    pub items: Vec<BlockItem>,
    /// Index of the line following the closing brace.
    pub end: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum BlockError {
    /// End of input reached before the closing brace.
    Unclosed,
    /// A `;` ends the declaration before any `{`.
    MissingBody,
}

/// Reads the body of the declaration starting at `start`.
///
/// Items are the `separator`-delimited pieces of text found directly inside
/// the outermost braces. Separators inside parentheses do not split, so
/// `A = MAKE(1, 2)` stays one item. A line break ends an item unless a
/// parenthesis is still open, and so does a nested block:
/// `void Reset() { x = 0; }` yields the single item `void Reset()`.
/// Text before the opening brace, nested blocks, `//` and `/* */` comments
/// and preprocessor lines never produce items.
pub(crate) fn read_block(
    lines: &[&str],
    start: usize,
    separator: char,
) -> Result<Block, BlockError> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut item_line = start;
    let mut depth = 0_i32;
    let mut parens = 0_i32;
    let mut opened = false;
    let mut in_comment = false;

    for (index, line) in lines.iter().enumerate().skip(start) {
        if !in_comment && line.trim_start().starts_with('#') {
            continue;
        }

        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            if in_comment {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    in_comment = false;
                    if depth == 1 {
                        current.push(' ');
                    }
                }
                continue;
            }

            match c {
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    in_comment = true;
                }
                '{' => {
                    if depth == 1 {
                        flush(&mut items, &mut current, item_line);
                        parens = 0;
                    }
                    depth += 1;
                    opened = true;
                }
                '}' => {
                    depth -= 1;
                    if depth <= 0 {
                        flush(&mut items, &mut current, item_line);
                        return Ok(Block {
                            items,
                            end: index + 1,
                        });
                    }
                }
                ';' if depth == 0 && !opened => return Err(BlockError::MissingBody),
                c if depth == 1 => {
                    match c {
                        '(' => parens += 1,
                        ')' => parens = (parens - 1).max(0),
                        _ => {}
                    }
                    if c == separator && parens == 0 {
                        flush(&mut items, &mut current, item_line);
                    } else {
                        if !c.is_whitespace() && current.trim().is_empty() {
                            item_line = index;
                        }
                        current.push(c);
                    }
                }
                _ => {}
            }
        }
        if depth == 1 && parens == 0 {
            flush(&mut items, &mut current, item_line);
        }
    }

    Err(BlockError::Unclosed)
}

fn flush(items: &mut Vec<BlockItem>, current: &mut String, line: usize) {
    let text = current.trim();
    if !text.is_empty() {
        items.push(BlockItem {
            line,
            text: text.to_owned(),
        });
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(block: &Block) -> Vec<&str> {
        block.items.iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn multi_line_enum_body() {
        let lines = [
            "enum Color",
            "{",
            "    Color_Red,     // first",
            "",
            "    Color_Green = 4,",
            "    Color_Blue",
            "};",
            "int after;",
        ];
        let block = read_block(&lines, 0, ',').unwrap();
        assert_eq!(texts(&block), vec!["Color_Red", "Color_Green = 4", "Color_Blue"]);
        assert_eq!(block.items[1].line, 4);
        assert_eq!(block.end, 7);
    }

    #[test]
    fn single_line_body() {
        let lines = ["struct Point { f32 x; f32 y; void Reset(); };"];
        let block = read_block(&lines, 0, ';').unwrap();
        assert_eq!(texts(&block), vec!["f32 x", "f32 y", "void Reset()"]);
        assert_eq!(block.end, 1);
    }

    #[test]
    fn nested_blocks_are_skipped() {
        let lines = [
            "struct Timer",
            "{",
            "    void Reset() { elapsed = 0; }",
            "    void Tick()",
            "    {",
            "        elapsed += 1;",
            "    }",
            "    f32 elapsed;",
            "};",
        ];
        let block = read_block(&lines, 0, ';').unwrap();
        assert_eq!(texts(&block), vec!["void Reset()", "void Tick()", "f32 elapsed"]);
        assert_eq!(block.end, 9);
    }

    #[test]
    fn access_specifiers_stay_on_their_line() {
        let lines = ["class Camera {", "public:", "    f32 fov;", "};"];
        let block = read_block(&lines, 0, ';').unwrap();
        assert_eq!(texts(&block), vec!["public:", "f32 fov"]);
    }

    #[test]
    fn preprocessor_lines_are_ignored() {
        let lines = ["enum Mode {", "#if DEBUG", "  Mode_Debug,", "#endif", "};"];
        let block = read_block(&lines, 0, ',').unwrap();
        assert_eq!(texts(&block), vec!["Mode_Debug"]);
    }

    #[test]
    fn unclosed_block() {
        let lines = ["enum Color {", "  Red,", "  Green,"];
        assert_eq!(read_block(&lines, 0, ',').unwrap_err(), BlockError::Unclosed);
    }

    #[test]
    fn forward_declaration_has_no_body() {
        let lines = ["enum class Color : u8;", "struct Later { f32 x; };"];
        assert_eq!(
            read_block(&lines, 0, ',').unwrap_err(),
            BlockError::MissingBody
        );
    }

    #[test]
    fn closing_brace_without_opening_terminates() {
        let lines = ["enum Broken", "  Broken_A", "}", "int after;"];
        let block = read_block(&lines, 0, ',').unwrap();
        assert!(block.items.is_empty());
        assert_eq!(block.end, 3);
    }

    #[test]
    fn block_comments_are_ignored() {
        let lines = [
            "enum Mode {",
            "  Mode_A,",
            "  /* Mode_Old, */",
            "  Mode_B, /* spans",
            "  Mode_Gone,",
            "  lines */ Mode_C",
            "};",
        ];
        let block = read_block(&lines, 0, ',').unwrap();
        assert_eq!(texts(&block), vec!["Mode_A", "Mode_B", "Mode_C"]);
        assert_eq!(block.items[2].line, 5);
        assert_eq!(block.end, 7);
    }

    #[test]
    fn separators_inside_parentheses_do_not_split() {
        let lines = [
            "enum Mode {",
            "  Mode_A = MAKE(1, 2), Mode_B,",
            "  Mode_C = MAKE(3,",
            "  4),",
            "};",
        ];
        let block = read_block(&lines, 0, ',').unwrap();
        assert_eq!(
            texts(&block),
            vec!["Mode_A = MAKE(1, 2)", "Mode_B", "Mode_C = MAKE(3,  4)"]
        );
        assert_eq!(block.items[2].line, 2);
    }
}
