//! Certificate renderer
//!
//! Renders a familiar into a self-contained, printable HTML document. The
//! output carries its own styles and print trigger and references nothing
//! external, so it can be written into a blank display surface as-is.

use chrono::NaiveDate;

use crate::domain::entities::Familiar;

/// Shown in the blessing/curse badge when a familiar has neither
const NO_BOON: &str = "—";

/// Name on the certificate seal
const SEAL_NAME: &str = "Morboddities";

const STYLE: &str = "body{font-family:ui-serif,Georgia,serif;background:#0b0b0b;color:#eee;margin:0}\
.wrap{max-width:900px;margin:40px auto;padding:40px;border:2px solid #fff3;border-radius:16px;background:linear-gradient(180deg,#111,#0b0b0b)}\
.title{font-size:40px;letter-spacing:2px;text-align:center}\
.rule{height:1px;background:linear-gradient(90deg,transparent,#aaa,transparent);margin:18px 0}\
.grid{display:grid;grid-template-columns:1fr 1fr;gap:24px}\
.badge{border:1px solid #fff3;border-radius:12px;padding:16px;text-align:center}\
.sig{margin-top:48px;display:flex;justify-content:space-between;gap:24px}\
.sig div{border-top:1px solid #fff3;padding-top:8px;text-align:center}\
@media print{.wrap{box-shadow:none}}";

/// Document title for a familiar's certificate
pub fn certificate_title(familiar: &Familiar) -> String {
    format!("Adoption — {}", familiar.name)
}

/// US short date, e.g. 10/16/2026
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Render the adoption certificate for `familiar`, dated `date`
pub fn render_certificate(familiar: &Familiar, date: NaiveDate) -> String {
    let mut buf = String::new();

    buf.push_str("<!doctype html><html><head><meta charset='utf-8'>");
    buf.push_str(&format!(
        "<title>{}</title>",
        escape_html(&certificate_title(familiar))
    ));
    buf.push_str(&format!("<style>{}</style></head><body>", STYLE));

    buf.push_str("<div class='wrap'><div class='title'>Certificate of Adoption</div>");
    buf.push_str("<div class='rule'></div>");

    buf.push_str(&format!(
        "<p>This certifies that the bearer has adopted <strong>{}</strong>, \
         a {} familiar of {}, brought forth from {}.</p>",
        escape_html(&familiar.name),
        familiar.rarity,
        escape_html(&familiar.temperament),
        escape_html(&familiar.origin),
    ));

    buf.push_str("<div class='grid'>");
    buf.push_str(&format!(
        "<div class='badge'><div><strong>Traits</strong></div><div>{}</div></div>",
        escape_html(&familiar.traits_line())
    ));
    buf.push_str(&format!(
        "<div class='badge'><div><strong>Blessing/Curse</strong></div><div>{}</div></div>",
        escape_html(familiar.boon.text().unwrap_or(NO_BOON))
    ));
    buf.push_str("</div>");

    buf.push_str(&format!(
        "<p style='margin-top:16px'><em>Oath:</em> {}</p>",
        escape_html(&familiar.oath)
    ));

    buf.push_str(&format!(
        "<div class='sig'><div>Keeper Signature</div><div>Adoption Date: {}</div>\
         <div>Seal of {}</div></div>",
        format_short_date(date),
        SEAL_NAME
    ));

    buf.push_str("</div><script>window.print()</script></body></html>");

    buf
}

/// Escape text for inclusion in HTML element content and attributes
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
