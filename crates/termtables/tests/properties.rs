use proptest::prelude::*;
use termtables::{display_width, Config, Table};

// Strategy for generating rectangular-ish bodies: short rows allowed
fn body_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 1..5), 1..8)
}

fn title_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), "[a-zA-Z ]{1,40}".prop_map(Some)]
}

fn headers_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
    prop_oneof![
        Just(None),
        prop::collection::vec("[A-Z][a-z]{0,8}", 1..5).prop_map(Some)
    ]
}

fn build(
    body: &[Vec<String>],
    title: &Option<String>,
    headers: &Option<Vec<String>>,
    utf8: bool,
    skip_border: bool,
) -> Table {
    let mut table = Table::with_config(Config::default().utf8(utf8));
    table.skip_border(skip_border);
    if let Some(title) = title {
        table.add_title(title.as_str());
    }
    if let Some(headers) = headers {
        table.add_headers(headers);
    }
    for row in body {
        table.add_row(row);
    }
    table
}

proptest! {
    #[test]
    fn every_line_has_the_same_width(
        body in body_strategy(),
        title in title_strategy(),
        headers in headers_strategy(),
        utf8 in any::<bool>(),
        skip_border in any::<bool>(),
    ) {
        let table = build(&body, &title, &headers, utf8, skip_border);
        let rendered = table.render();
        let width = table.width();
        for line in rendered.lines() {
            prop_assert_eq!(display_width(line), width);
        }
        prop_assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn render_is_idempotent(
        body in body_strategy(),
        title in title_strategy(),
        headers in headers_strategy(),
    ) {
        let table = build(&body, &title, &headers, true, false);
        prop_assert_eq!(table.render(), table.render());
    }

    #[test]
    fn line_count_follows_structure(
        body in body_strategy(),
        title in title_strategy(),
        headers in headers_strategy(),
        skip_border in any::<bool>(),
    ) {
        let table = build(&body, &title, &headers, false, skip_border);
        let mut expected = body.len();
        if title.is_some() {
            expected += 2;
        }
        if headers.is_some() {
            expected += 2;
        }
        if !skip_border {
            expected += 2;
        }
        prop_assert_eq!(table.render().lines().count(), expected);
    }

    #[test]
    fn column_width_is_widest_cell(body in body_strategy()) {
        let table = build(&body, &None, &None, false, false);
        let columns = body.iter().map(Vec::len).max().unwrap_or(0);
        let expected: usize = (0..columns)
            .map(|i| {
                body.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| display_width(cell))
                    .max()
                    .unwrap_or(0)
                    + 3
            })
            .sum::<usize>()
            + 1;
        prop_assert_eq!(table.width(), expected);
    }

    #[test]
    fn title_never_wider_than_table(
        body in body_strategy(),
        title in "[a-zA-Z ]{1,60}",
    ) {
        let table = build(&body, &Some(title.clone()), &None, false, false);
        // interior = width minus the two outer borders and paddings
        prop_assert!(table.width() >= display_width(&title) + 4);
    }
}
