//! XML serialization for `urlset` and `sitemapindex` documents.

use time::{OffsetDateTime, UtcOffset};

use super::entry::{SitemapEntry, SitemapReference};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const NAMESPACES: &str = concat!(
    "xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" ",
    "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" ",
    "xmlns:xhtml=\"http://www.w3.org/1999/xhtml\" ",
    "xsi:schemaLocation=\"http://www.sitemaps.org/schemas/sitemap/0.9 ",
    "http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd\"",
);

/// Render a `sitemapindex` listing every numbered sitemap.
pub fn write_index(sitemaps: &[SitemapReference]) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!("<sitemapindex {NAMESPACES}>\n"));
    for sitemap in sitemaps {
        xml.push_str("  <sitemap>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&sitemap.location)));
        push_lastmod(&mut xml, sitemap.last_modified);
        xml.push_str("  </sitemap>\n");
    }
    xml.push_str("</sitemapindex>\n");
    xml
}

/// Render a `urlset`.
///
/// Localized entries expand to one `<url>` per alternate location, each
/// carrying `xhtml:link` siblings for every alternate with a known language.
pub fn write_urlset(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!("<urlset {NAMESPACES}>\n"));
    for entry in entries {
        if entry.alternate_locations.is_empty() {
            if !entry.location.is_empty() {
                push_url(&mut xml, &entry.location, entry);
            }
            continue;
        }
        for alternate in &entry.alternate_locations {
            push_url(&mut xml, &alternate.href, entry);
        }
    }
    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, location: &str, entry: &SitemapEntry) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(location)));
    for alternate in &entry.alternate_locations {
        let Some(hreflang) = alternate.hreflang.as_deref() else {
            continue;
        };
        xml.push_str(&format!(
            "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />\n",
            xml_escape(hreflang),
            xml_escape(&alternate.href),
        ));
    }
    xml.push_str(&format!(
        "    <changefreq>{}</changefreq>\n",
        entry.change_frequency
    ));
    push_lastmod(xml, entry.last_modified);
    xml.push_str("  </url>\n");
}

fn push_lastmod(xml: &mut String, value: OffsetDateTime) {
    xml.push_str(&format!("    <lastmod>{}</lastmod>\n", format_lastmod(value)));
}

/// ISO-8601 calendar date (`YYYY-MM-DD`) in UTC.
pub fn format_lastmod(value: OffsetDateTime) -> String {
    let date = value.to_offset(UtcOffset::UTC).date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;
    use time::{Date, Month};

    use super::*;
    use crate::application::sitemap::entry::AlternateLocation;
    use crate::domain::types::ChangeFrequency;

    #[test]
    fn lastmod_is_utc_date() {
        assert_eq!(format_lastmod(datetime!(2024-03-01 01:30 +02:00)), "2024-02-29");

        let early = Date::from_calendar_date(987, Month::January, 5)
            .expect("date")
            .with_hms(23, 0, 0)
            .expect("time")
            .assume_offset(UtcOffset::from_hms(-1, 0, 0).expect("offset"));
        assert_eq!(format_lastmod(early), "0987-01-06");
    }

    #[test]
    fn escapes_text_and_attributes() {
        let entry = SitemapEntry::new(
            "https://shop.example/search?q=a&b=<c>",
            ChangeFrequency::Daily,
            datetime!(2024-05-01 00:00 UTC),
        );
        let xml = write_urlset(&[entry]);

        assert!(xml.contains("<loc>https://shop.example/search?q=a&amp;b=&lt;c&gt;</loc>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<lastmod>2024-05-01</lastmod>"));
    }

    #[test]
    fn localized_entry_expands_per_alternate() {
        let entry = SitemapEntry::new(
            "https://shop.example/shoes",
            ChangeFrequency::Weekly,
            datetime!(2024-05-01 00:00 UTC),
        )
        .with_alternates(vec![
            AlternateLocation {
                href: "https://shop.example/en/shoes".to_string(),
                hreflang: Some("en".to_string()),
            },
            AlternateLocation {
                href: "https://shop.example/de/schuhe".to_string(),
                hreflang: Some("de".to_string()),
            },
            AlternateLocation {
                href: "https://shop.example/shoes".to_string(),
                hreflang: None,
            },
        ]);
        let xml = write_urlset(&[entry]);

        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("<xhtml:link").count(), 6);
        assert!(xml.contains("<loc>https://shop.example/de/schuhe</loc>"));
        assert!(xml.contains(concat!(
            r#"<xhtml:link rel="alternate" hreflang="de" "#,
            r#"href="https://shop.example/de/schuhe" />"#,
        )));
    }

    #[test]
    fn empty_location_without_alternates_is_skipped() {
        let entry = SitemapEntry::new("", ChangeFrequency::Weekly, datetime!(2024-05-01 00:00 UTC));
        let xml = write_urlset(&[entry]);
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn index_lists_each_sitemap() {
        let xml = write_index(&[
            SitemapReference {
                location: "https://shop.example/sitemap/1.xml".to_string(),
                last_modified: datetime!(2024-05-01 12:00 UTC),
            },
            SitemapReference {
                location: "https://shop.example/sitemap/2.xml".to_string(),
                last_modified: datetime!(2024-05-01 12:00 UTC),
            },
        ]);

        insta::assert_snapshot!(xml, @r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xhtml="http://www.w3.org/1999/xhtml" xsi:schemaLocation="http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd">
          <sitemap>
            <loc>https://shop.example/sitemap/1.xml</loc>
            <lastmod>2024-05-01</lastmod>
          </sitemap>
          <sitemap>
            <loc>https://shop.example/sitemap/2.xml</loc>
            <lastmod>2024-05-01</lastmod>
          </sitemap>
        </sitemapindex>
        "#);
    }
}
