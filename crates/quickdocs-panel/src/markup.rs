//! Panel markup tree and serialization.
//!
//! The host accepts exactly one shape: `Extensions > Panel > Page* > Row* > Widget{1,2}`.
//! [`build_panel`] derives that tree from a normalized [`Catalog`]; [`PanelDocument::to_xml`]
//! renders it as the payload of the host's panel save command.

#![allow(missing_docs)]

use std::fmt;

use smol_str::SmolStr;

use crate::catalog::Catalog;
use crate::config::PanelAppearance;
use crate::widget_id::{page_id, WidgetAction, WidgetId};

/// Fixed identifier the panel is saved and removed under.
pub const PANEL_ID: &str = "uDocsQR~panel";

const PANEL_LOCATION: &str = "HomeScreen";
const PANEL_ACTIVITY: &str = "Custom";
const OPEN_SITE_LABEL: &str = "Open Site";
const QR_CODE_LABEL: &str = "QR Code";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetSize {
    /// Half a row; two widgets share the row.
    Half,
    /// The whole row.
    Full,
}

impl WidgetSize {
    #[must_use]
    pub fn options(self) -> &'static str {
        match self {
            Self::Half => "size=2",
            Self::Full => "size=4",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub id: WidgetId,
    pub name: &'static str,
    pub size: WidgetSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: SmolStr,
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub name: SmolStr,
    pub page_id: String,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelDocument {
    pub panel_id: &'static str,
    pub appearance: PanelAppearance,
    pub pages: Vec<Page>,
}

/// Builds the full panel tree. Pages follow `catalog.categories`; rows within a
/// page follow configuration order.
#[must_use]
pub fn build_panel(catalog: &Catalog, appearance: &PanelAppearance) -> PanelDocument {
    let pages = catalog
        .categories
        .iter()
        .map(|category| {
            let rows = catalog
                .sites_in(category)
                .map(|site| {
                    tracing::debug!(
                        site = %site.name,
                        category = %site.category,
                        url = %site.url,
                        "adding site to page"
                    );
                    let open = |size| Widget {
                        id: WidgetId::new(
                            site.category.clone(),
                            site.name.clone(),
                            WidgetAction::OpenSite,
                            site.url.clone(),
                        ),
                        name: OPEN_SITE_LABEL,
                        size,
                    };
                    let widgets = if site.enable_qr {
                        vec![
                            open(WidgetSize::Half),
                            Widget {
                                id: WidgetId::new(
                                    site.category.clone(),
                                    site.name.clone(),
                                    WidgetAction::OpenQrCode,
                                    site.url.clone(),
                                ),
                                name: QR_CODE_LABEL,
                                size: WidgetSize::Half,
                            },
                        ]
                    } else {
                        vec![open(WidgetSize::Full)]
                    };
                    Row {
                        name: site.name.clone(),
                        widgets,
                    }
                })
                .collect();
            Page {
                name: category.clone(),
                page_id: page_id(category),
                rows,
            }
        })
        .collect();

    PanelDocument {
        panel_id: PANEL_ID,
        appearance: appearance.clone(),
        pages,
    }
}

impl PanelDocument {
    /// Every widget on the panel, page by page.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.pages
            .iter()
            .flat_map(|page| page.rows.iter())
            .flat_map(|row| row.widgets.iter())
    }

    /// Payload of the panel save command.
    #[must_use]
    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PanelDocument {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, "<Extensions>")?;
        writeln!(out, "  <Panel>")?;
        write_element(out, 4, "PanelId", self.panel_id)?;
        write_element(out, 4, "Location", PANEL_LOCATION)?;
        write_element(out, 4, "Icon", &self.appearance.icon)?;
        write_element(out, 4, "Name", &self.appearance.name)?;
        write_element(out, 4, "Color", &self.appearance.color_hex())?;
        write_element(out, 4, "ActivityType", PANEL_ACTIVITY)?;
        for page in &self.pages {
            render_page(out, page)?;
        }
        writeln!(out, "  </Panel>")?;
        writeln!(out, "</Extensions>")
    }
}

fn render_page(out: &mut impl fmt::Write, page: &Page) -> fmt::Result {
    writeln!(out, "    <Page>")?;
    write_element(out, 6, "Name", &page.name)?;
    for row in &page.rows {
        writeln!(out, "      <Row>")?;
        write_element(out, 8, "Name", &row.name)?;
        for widget in &row.widgets {
            writeln!(out, "        <Widget>")?;
            write_element(out, 10, "WidgetId", &widget.id.encode())?;
            write_element(out, 10, "Name", widget.name)?;
            write_element(out, 10, "Type", "Button")?;
            write_element(out, 10, "Options", widget.size.options())?;
            writeln!(out, "        </Widget>")?;
        }
        writeln!(out, "      </Row>")?;
    }
    write_element(out, 6, "PageId", &page.page_id)?;
    writeln!(out, "      <Options/>")?;
    writeln!(out, "    </Page>")
}

fn write_element(out: &mut impl fmt::Write, indent: usize, tag: &str, text: &str) -> fmt::Result {
    writeln!(
        out,
        "{:indent$}<{tag}>{}</{tag}>",
        "",
        escape_xml_text(text)
    )
}

fn escape_xml_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
