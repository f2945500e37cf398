/// Header plus data rows of a comma-separated file. Cells are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number where the record starts.
    pub line: usize,
    pub cells: Vec<String>,
}

impl Row {
    pub fn cell(&self, idx: usize) -> &str {
        self.cells.get(idx).map(String::as_str).unwrap_or("")
    }
}

/// Parses CSV with `"` quoting and `""` escapes. Quoted cells may span
/// lines. Blank lines are skipped. Errors carry the offending line.
pub fn parse_table(text: &str) -> Result<Table, (usize, String)> {
    let mut records = Vec::new();
    let mut cells: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut record_line = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    cell.push('\n');
                }
                _ => cell.push(c),
            }
            continue;
        }
        match c {
            '"' if cell.trim().is_empty() => {
                cell.clear();
                in_quotes = true;
            }
            ',' => cells.push(std::mem::take(&mut cell)),
            '\r' => {}
            '\n' => {
                cells.push(std::mem::take(&mut cell));
                push_record(&mut records, std::mem::take(&mut cells), record_line);
                line += 1;
                record_line = line;
            }
            _ => cell.push(c),
        }
    }
    if in_quotes {
        return Err((record_line, "unterminated quoted field".to_string()));
    }
    if !cell.is_empty() || !cells.is_empty() {
        cells.push(cell);
        push_record(&mut records, cells, record_line);
    }

    let mut records = records.into_iter();
    let header = match records.next() {
        Some(h) => h.cells,
        None => return Err((1, "file is empty".to_string())),
    };
    Ok(Table {
        header,
        rows: records.collect(),
    })
}

fn push_record(records: &mut Vec<Row>, cells: Vec<String>, line: usize) {
    let cells: Vec<String> = cells.into_iter().map(|c| c.trim().to_string()).collect();
    if cells.iter().all(|c| c.is_empty()) {
        return;
    }
    records.push(Row { line, cells });
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;
