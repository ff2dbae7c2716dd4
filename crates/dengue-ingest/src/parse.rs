/// Splits `line` on every occurrence of `delimiter`.
///
/// Exact positional split: no quoting, no escaping, no trimming. A line
/// without the delimiter yields a single field, so an empty line yields one
/// empty field. Checking the field count is left to the caller.
pub fn parse(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_case_line_on_pipes() {
        let fields = parse("1|2015-11-05|10|2300000|Fortaleza|CE|60000|-3.7|-38.5", '|');
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[1], "2015-11-05");
        assert_eq!(fields[5], "CE");
    }

    #[test]
    fn keeps_empty_and_padded_fields() {
        let fields = parse("1|| 10 |", '|');
        assert_eq!(fields, vec!["1", "", " 10 ", ""]);
    }

    #[test]
    fn quotes_are_not_special() {
        let fields = parse("\"a,b\",c", ',');
        assert_eq!(fields, vec!["\"a", "b\"", "c"]);
    }

    #[test]
    fn empty_line_is_one_empty_field() {
        assert_eq!(parse("", ','), vec![""]);
    }
}
