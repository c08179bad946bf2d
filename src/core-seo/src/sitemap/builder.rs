//! Sitemap XML generation.

use data_model_seo::{BaseUrl, LastModified, Route};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::clock::Clock;
use crate::errors::{Result, SeoError};
use crate::sitemap::url_utils::resolve_loc;

/// Namespace of the sitemap protocol.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Serializes routes into a sitemap-protocol XML document.
///
/// Emits one `<url>` per route, in order. `<loc>` is always present; `<lastmod>`, `<changefreq>`
/// and `<priority>` only appear for routes that set them. `LastModified::Today` resolves against
/// `clock`, so the same routes and the same day always produce byte-identical output.
///
/// # Examples
///
/// ```
/// # use core_seo::clock::SystemClock;
/// # use core_seo::sitemap::build_sitemap_xml;
/// # use data_model_seo::{BaseUrl, ChangeFrequency, Priority, Route};
/// let base = BaseUrl::parse("https://nexxtgroup.com").unwrap();
/// let routes = vec![
///     Route::new("/about")
///         .changefreq(ChangeFrequency::Monthly)
///         .priority(Priority::new(0.9).unwrap()),
/// ];
/// let xml = build_sitemap_xml(&base, &routes, &SystemClock).unwrap();
/// assert!(xml.contains("<loc>https://nexxtgroup.com/about</loc>"));
/// assert!(xml.contains("<priority>0.9</priority>"));
/// assert!(!xml.contains("<lastmod>"));
/// ```
pub fn build_sitemap_xml(base_url: &BaseUrl, routes: &[Route], clock: &impl Clock) -> Result<String> {
    let today = clock.today();
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)])),
    )?;

    for route in routes {
        write(&mut writer, Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &resolve_loc(base_url, route))?;
        if let Some(lastmod) = route.lastmod {
            let date = lastmod.resolve(today).format(LastModified::DATE_FORMAT).to_string();
            write_text_element(&mut writer, "lastmod", &date)?;
        }
        if let Some(changefreq) = route.changefreq {
            write_text_element(&mut writer, "changefreq", changefreq.as_str())?;
        }
        if let Some(priority) = route.priority {
            write_text_element(&mut writer, "priority", &priority.to_string())?;
        }
        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| SeoError::XmlWrite(e.to_string()))
}

/// Writes `<name>text</name>` on a single line, escaping the text.
fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}
