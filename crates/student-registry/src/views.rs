//! HTML rendering for the entry form and student table

use crate::models::StudentRecord;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Student Data Entry</title>
    <meta charset="UTF-8" />
    <style>
      body {
        font-family: Arial, sans-serif;
        margin: 40px;
        background: #f9fafb;
      }
      h1 {
        margin-bottom: 10px;
      }
      form {
        margin-bottom: 30px;
        padding: 15px;
        border: 1px solid #e5e7eb;
        border-radius: 6px;
        max-width: 400px;
        background: #ffffff;
      }
      label {
        display: block;
        margin-top: 10px;
        font-size: 14px;
      }
      input {
        width: 100%;
        padding: 6px;
        margin-top: 4px;
        box-sizing: border-box;
        border-radius: 4px;
        border: 1px solid #d1d5db;
      }
      button {
        margin-top: 15px;
        padding: 8px 14px;
        cursor: pointer;
        border-radius: 4px;
        border: none;
        background: #2563eb;
        color: white;
        font-weight: 600;
      }
      button:hover {
        opacity: 0.9;
      }
      table {
        border-collapse: collapse;
        width: 100%;
        max-width: 600px;
        background: #ffffff;
      }
      th, td {
        border: 1px solid #e5e7eb;
        padding: 8px;
        text-align: left;
        font-size: 14px;
      }
      th {
        background-color: #f3f4f6;
      }
      .no-data {
        color: #6b7280;
        margin-top: 10px;
      }
    </style>
  </head>
  <body>
    <h1>Student Data Entry</h1>

    <form method="POST" action="/students">
      <label>
        Name:
        <input type="text" name="name" required />
      </label>
      <label>
        Roll Number:
        <input type="text" name="roll" required />
      </label>
      <label>
        Department:
        <input type="text" name="department" required />
      </label>
      <button type="submit">Add Student</button>
    </form>

    <h2>Student List</h2>
"#;

const PAGE_TAIL: &str = r#"  </body>
</html>
"#;

const EMPTY_LIST: &str = "    <p class=\"no-data\">No students added yet.</p>\n";

const TABLE_HEAD: &str = r#"    <table>
      <thead>
        <tr>
          <th>#</th>
          <th>Name</th>
          <th>Roll No.</th>
          <th>Department</th>
        </tr>
      </thead>
      <tbody>
"#;

const TABLE_TAIL: &str = r#"      </tbody>
    </table>
"#;

/// Render the full index page: entry form followed by the student table
pub fn render_index(records: &[StudentRecord]) -> String {
    let mut page = String::with_capacity(PAGE_HEAD.len() + 128 * (records.len() + 1));
    page.push_str(PAGE_HEAD);

    if records.is_empty() {
        page.push_str(EMPTY_LIST);
    } else {
        page.push_str(TABLE_HEAD);
        for (index, record) in records.iter().enumerate() {
            page.push_str(&render_row(index + 1, record));
        }
        page.push_str(TABLE_TAIL);
    }

    page.push_str(PAGE_TAIL);
    page
}

fn render_row(position: usize, record: &StudentRecord) -> String {
    format!(
        "        <tr>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n        </tr>\n",
        position,
        escape_html(&record.name),
        escape_html(&record.roll),
        escape_html(&record.department),
    )
}

/// Escape text for use inside HTML element content or quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
