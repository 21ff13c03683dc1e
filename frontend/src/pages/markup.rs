use shared::Transaction;

use crate::services::date_utils::format_transaction_date;

/// Escape text for use inside element content and quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markup of one transaction row
pub fn transaction_html(item: &Transaction) -> String {
    format!(
        r#"
      <div class="transaction transaction_{kind} row">
        <div class="col-md-7 transaction__details">
          <div class="transaction__icon">
              <span class="fa fa-money fa-2x"></span>
          </div>
          <div class="transaction__info">
              <h4 class="transaction__title">{name}</h4>
              <div class="transaction__date">{date}</div>
          </div>
        </div>
        <div class="col-md-3">
          <div class="transaction__summ">
              {sum} <span class="currency">₽</span>
          </div>
        </div>
        <div class="col-md-2 transaction__controls">
            <button class="btn btn-danger transaction__remove" data-id="{id}">
                <i class="fa fa-trash"></i>
            </button>
        </div>
      </div>
      "#,
        kind = item.transaction_type.as_str(),
        name = escape_html(&item.name),
        date = escape_html(&format_transaction_date(&item.created_at)),
        sum = item.sum,
        id = escape_html(&item.id),
    )
}

/// Rows for `items`, in the order the server sent them
pub fn transactions_html(items: &[Transaction]) -> String {
    items.iter().map(transaction_html).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransactionType;

    fn transaction(id: &str, kind: TransactionType, name: &str, sum: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            transaction_type: kind,
            name: name.to_string(),
            sum,
            created_at: "2019-03-10T03:20:41".to_string(),
        }
    }

    #[test]
    fn test_row_carries_type_class_date_sum_and_id() {
        let html = transaction_html(&transaction("tx-9", TransactionType::Expense, "Coffee", -250.0));

        assert!(html.contains(r#"class="transaction transaction_expense row""#));
        assert!(html.contains(r#"<h4 class="transaction__title">Coffee</h4>"#));
        assert!(html.contains("10 марта 2019 г. в 03:20"));
        assert!(html.contains("-250 <span class=\"currency\">₽</span>"));
        assert!(html.contains(r#"data-id="tx-9""#));
    }

    #[test]
    fn test_fractional_sum_is_printed_as_is() {
        let html = transaction_html(&transaction("1", TransactionType::Income, "Salary", 1250.5));
        assert!(html.contains("transaction_income"));
        assert!(html.contains("1250.5 <span"));
    }

    #[test]
    fn test_name_and_id_are_escaped() {
        let html = transaction_html(&transaction(
            "\"><script>",
            TransactionType::Income,
            "<b>Bonus</b> & co",
            1.0,
        ));

        assert!(html.contains("&lt;b&gt;Bonus&lt;/b&gt; &amp; co"));
        assert!(html.contains(r#"data-id="&quot;&gt;&lt;script&gt;""#));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_rows_keep_server_order() {
        let items = vec![
            transaction("b", TransactionType::Income, "Second by id", 2.0),
            transaction("a", TransactionType::Expense, "First by id", 1.0),
        ];
        let html = transactions_html(&items);

        let b = html.find(r#"data-id="b""#).unwrap();
        let a = html.find(r#"data-id="a""#).unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_no_rows_is_empty_markup() {
        assert_eq!(transactions_html(&[]), "");
    }
}
