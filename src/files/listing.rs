//! Directory listing rendering

use std::path::Path;

use anyhow::Result;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::files::hits::HitCounter;

/// Characters escaped when a name is embedded in a link target.
const HREF_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%');

/// Listing priority: index.html first, then doc.pdf, then image.png, then
/// everything else. Matched on the lowercased name.
fn sort_rank(lower_name: &str) -> u8 {
    match lower_name {
        "index.html" => 0,
        "doc.pdf" => 1,
        "image.png" => 2,
        _ => 10,
    }
}

/// Render an HTML listing of a directory's immediate children.
///
/// `rel` is the directory's path relative to the serve root (empty for the
/// root itself, which gets no parent link). File rows show the live hit count
/// for the file's path; directory rows and the parent row show a placeholder.
pub async fn render(dir: &Path, rel: &str, hits: &HitCounter) -> Result<String> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut items: Vec<(String, bool)> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().await?.is_dir();
        items.push((name, is_dir));
    }
    items.sort_by_key(|(name, _)| {
        let lower = name.to_lowercase();
        (sort_rank(&lower), lower)
    });

    let title = if rel.is_empty() {
        "/".to_string()
    } else {
        format!("/{rel}/")
    };

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n");
    page.push_str(&format!(
        "<html><head><meta charset='utf-8'><title>Index of {title}</title>\n"
    ));
    page.push_str(
        "<style>body{font-family:system-ui,Segoe UI,Arial} a{text-decoration:none} td{padding:2px 12px}</style>\n",
    );
    page.push_str("</head><body>\n");
    page.push_str(&format!("<h1>Index of {title}</h1>\n"));
    page.push_str("<table>\n<tr><th>File / Directory</th><th>Hits</th></tr>\n");

    if !rel.is_empty() {
        let parent = rel.rsplit_once('/').map_or("", |(p, _)| p);
        let href = if parent.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", utf8_percent_encode(parent, HREF_ESCAPE))
        };
        page.push_str(&format!(
            "<tr><td><a href=\"{href}\">Parent Directory</a></td><td>-</td></tr>\n"
        ));
    }

    for (name, is_dir) in &items {
        let item_rel = if rel.is_empty() {
            name.clone()
        } else {
            format!("{rel}/{name}")
        };
        let mut href = format!("/{}", utf8_percent_encode(&item_rel, HREF_ESCAPE));
        let display = if *is_dir {
            href.push('/');
            format!("{name}/")
        } else {
            name.clone()
        };
        let count = if *is_dir {
            "-".to_string()
        } else {
            hits.get(&item_rel).await.to_string()
        };
        page.push_str(&format!(
            "<tr><td><a href=\"{href}\">{display}</a></td><td>{count}</td></tr>\n"
        ));
    }

    page.push_str("</table>\n</body></html>");
    Ok(page)
}
