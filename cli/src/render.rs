//! Plain-text rendering for moderation rows and notices.

use std::fmt::Write;

use client::pages::comments::TableRow;
use client::state::notice::{Notice, NoticeLevel};

const TITLE_WIDTH: usize = 36;

pub fn notice_line(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Info => "info",
    };
    format!("[{tag}] {notice}")
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_owned();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Post rows as a fixed-width table, each followed by its indented comments.
pub fn moderation_table(rows: &[TableRow]) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        out.push_str("no posts\n");
        return out;
    }

    let _ = writeln!(out, "{:<TITLE_WIDTH$}  {:<28}  {:<10}  {:>8}", "TITLE", "AUTHOR", "CREATED", "COMMENTS");
    for row in rows {
        match row {
            TableRow::Post(p) => {
                let author = format!("{} <{}>", p.author_username, p.author_email);
                let _ = writeln!(
                    out,
                    "{:<TITLE_WIDTH$}  {:<28}  {:<10}  {:>8}",
                    truncate(&p.title, TITLE_WIDTH),
                    truncate(&author, 28),
                    p.created,
                    p.comment_count
                );
            }
            TableRow::Comment(c) => {
                let _ = writeln!(out, "    {} {} <{}> · {}", c.comment_id, c.username, c.email, c.created);
                let _ = writeln!(out, "      {}", c.content);
            }
        }
    }
    out
}
