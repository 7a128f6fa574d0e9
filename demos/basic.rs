//! Basic usage example for html-crawler.
//!
//! Run with: `cargo run --example basic [URL]`
//!
//! Without a URL, a built-in page is cleaned.

use html_crawler::{HtmlCrawler, Options};

fn main() -> Result<(), html_crawler::Error> {
    let html = r#"
        <html>
        <head>
            <title>Example Article</title>
            <style>article { max-width: 40em; }</style>
        </head>
        <body>
            <nav><a href="/">Home</a> | <a href="/about">About</a></nav>
            <article>
                <h1>Example Article Title</h1>
                <p>The first paragraph has <strong>bold</strong> text and a
                <a href="https://example.com">link</a>.</p>
                <ul>
                    <li>One &amp; only</li>
                    <li>Two</li>
                </ul>
                <script>console.log("tracking");</script>
            </article>
        </body>
        </html>
    "#;

    let crawler = match std::env::args().nth(1) {
        Some(url) => HtmlCrawler::from_url_with(&url, &html_crawler::HttpFetcher::new(), Options::default())?,
        None => HtmlCrawler::from_html(html),
    };

    println!("=== Plain text ===");
    println!("{}", crawler.clean()?);

    let structured = crawler.keep_headings().keep_paragraphs().keep_lists().keep_links();

    println!("\n=== Allow-listed HTML ===");
    println!("{}", structured.clean()?);

    println!("\n=== Markdown ===");
    println!("{}", structured.with_markdown().clean()?);

    Ok(())
}
