//! Per-year HTML rendering
//!
//! Consumes a finished corpus and writes one self-contained HTML document
//! per year. Years render independently and share nothing, so they run as
//! parallel tasks; the task group is bounded by available parallelism and
//! the first failure is propagated after all tasks have settled.

use crate::model::{Corpus, YearArchive};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinSet;

/// Errors that can occur while rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

const STYLE: &str = r#"body { font-family: Arial, sans-serif; margin: 2cm; }
h1 { font-size: 24px; color: #333; }
h2 { font-size: 20px; color: #555; }
p { font-size: 14px; color: #333; margin: 0.5em 0; }
img { max-width: 100%; margin: 1em 0; display: block; }"#;

/// Formats one year as a standalone HTML document
///
/// Months with zero posts are omitted entirely. Each post gets a heading
/// combining its canonical date and title, followed by its content
/// fragments in extraction order.
pub fn render_year_html(year: &YearArchive) -> String {
    let mut html = String::new();

    html.push_str("<html>\n<head>\n<style>\n");
    html.push_str(STYLE);
    html.push_str("\n</style>\n</head>\n<body>\n");

    html.push_str(&format!("<h1>Blog Posts from {}</h1>\n", year.year));

    for month in &year.months {
        if month.is_empty() {
            continue;
        }
        html.push_str(&format!("<h2>{}</h2>\n", month.month));

        for post in &month.posts {
            html.push_str(&format!("<h3>{} - {}</h3>\n", post.date, post.title));
            for fragment in &post.content {
                html.push_str(fragment);
                html.push('\n');
            }
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Output file name for a year's document
pub fn year_file_name(year: i32) -> String {
    format!("Blog_{}.html", year)
}

/// Renders every year of the corpus into `output_dir`
///
/// One task per year, at most `available_parallelism` of them in flight.
/// All tasks run to completion; the first failure observed is returned.
pub async fn render_corpus(corpus: &Corpus, output_dir: &Path) -> RenderResult<()> {
    let limit = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);

    let mut pending: VecDeque<YearArchive> = corpus.years.iter().cloned().collect();
    let mut tasks: JoinSet<RenderResult<()>> = JoinSet::new();
    let mut failure: Option<RenderError> = None;

    loop {
        while tasks.len() < limit {
            match pending.pop_front() {
                Some(year) => {
                    let path = output_dir.join(year_file_name(year.year));
                    tasks.spawn(async move { render_year_to_file(&year, &path).await });
                }
                None => break,
            }
        }

        match tasks.join_next().await {
            Some(Ok(Ok(()))) => {}
            Some(Ok(Err(e))) => {
                if failure.is_none() {
                    failure = Some(e);
                }
            }
            Some(Err(e)) => {
                if failure.is_none() {
                    failure = Some(RenderError::Join(e));
                }
            }
            None => break,
        }
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

async fn render_year_to_file(year: &YearArchive, path: &PathBuf) -> RenderResult<()> {
    tracing::info!("Rendering {} to {}", year.year, path.display());

    let html = render_year_html(year);
    tokio::fs::write(path, html)
        .await
        .map_err(|source| RenderError::Io {
            path: path.display().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MonthArchive, Post};
    use tempfile::TempDir;

    fn post(title: &str) -> Post {
        Post {
            date: "15/08/2021".to_string(),
            title: title.to_string(),
            content: vec![
                "<p>Paragraph</p>".to_string(),
                "<img src=\"/pic.png\">".to_string(),
            ],
            url: "https://blog.example.com/p".to_string(),
        }
    }

    fn year() -> YearArchive {
        YearArchive {
            year: 2021,
            months: vec![
                MonthArchive {
                    month: 7,
                    posts: vec![],
                },
                MonthArchive {
                    month: 8,
                    posts: vec![post("August post")],
                },
            ],
        }
    }

    #[test]
    fn test_year_heading_and_style() {
        let html = render_year_html(&year());
        assert!(html.contains("<h1>Blog Posts from 2021</h1>"));
        assert!(html.contains("max-width: 100%"));
    }

    #[test]
    fn test_empty_month_is_omitted() {
        let html = render_year_html(&year());
        assert!(!html.contains("<h2>7</h2>"));
        assert!(html.contains("<h2>8</h2>"));
    }

    #[test]
    fn test_post_heading_combines_date_and_title() {
        let html = render_year_html(&year());
        assert!(html.contains("<h3>15/08/2021 - August post</h3>"));
    }

    #[test]
    fn test_fragments_rendered_in_order() {
        let html = render_year_html(&year());
        let p = html.find("<p>Paragraph</p>").unwrap();
        let img = html.find("<img src=\"/pic.png\">").unwrap();
        assert!(p < img);
    }

    #[tokio::test]
    async fn test_render_corpus_writes_one_file_per_year() {
        let dir = TempDir::new().unwrap();
        let corpus = Corpus {
            years: vec![
                year(),
                YearArchive {
                    year: 2022,
                    months: vec![],
                },
            ],
        };

        render_corpus(&corpus, dir.path()).await.unwrap();

        assert!(dir.path().join("Blog_2021.html").exists());
        assert!(dir.path().join("Blog_2022.html").exists());
    }

    #[tokio::test]
    async fn test_render_corpus_propagates_write_failure() {
        let corpus = Corpus { years: vec![year()] };
        let result = render_corpus(&corpus, Path::new("/nonexistent/render/dir")).await;
        assert!(matches!(result, Err(RenderError::Io { .. })));
    }
}
