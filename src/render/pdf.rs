use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfPageIndex, Pt,
};
use tracing::info;

use crate::config::DocumentSettings;
use crate::error::{Error, Result};

use super::Typesetter;
use super::format::StyledRun;
use super::layout::{Layout, PageGeometry, Placement};

const LAYER: &str = "Songs";

/// Typesetter drawing runs in Courier onto a PDF document.
pub struct PdfTypesetter {
    doc: PdfDocumentReference,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    layout: Layout,
}

impl PdfTypesetter {
    pub fn new(title: &str, settings: &DocumentSettings) -> Result<Self> {
        let geometry = PageGeometry::from_settings(settings);
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm::from(Pt(geometry.width)),
            Mm::from(Pt(geometry.height)),
            LAYER,
        );
        let regular = doc.add_builtin_font(BuiltinFont::Courier)?;
        let bold = doc.add_builtin_font(BuiltinFont::CourierBold)?;

        Ok(Self {
            doc,
            pages: vec![(page, layer)],
            regular,
            bold,
            layout: Layout::new(geometry),
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn draw(&mut self, placement: &Placement) {
        while self.pages.len() <= placement.page {
            let geometry = *self.layout.geometry();
            let (page, layer) = self.doc.add_page(
                Mm::from(Pt(geometry.width)),
                Mm::from(Pt(geometry.height)),
                LAYER,
            );
            self.pages.push((page, layer));
        }

        let (page, layer) = self.pages[placement.page];
        let font = if placement.bold {
            &self.bold
        } else {
            &self.regular
        };
        self.doc.get_page(page).get_layer(layer).use_text(
            placement.text.as_str(),
            placement.size,
            Mm::from(Pt(placement.x)),
            Mm::from(Pt(placement.y)),
            font,
        );
    }

    /// Write the finished document to `path`.
    pub fn save(self, path: &Path) -> Result<()> {
        let pages = self.pages.len();
        let file = File::create(path).map_err(|source| Error::Document {
            path: path.to_path_buf(),
            source,
        })?;
        self.doc.save(&mut BufWriter::new(file))?;
        info!(pages, "wrote {}", path.display());
        Ok(())
    }
}

impl Typesetter for PdfTypesetter {
    fn write_run(&mut self, run: &StyledRun) -> Result<()> {
        for placement in self.layout.place(run) {
            self.draw(&placement);
        }
        Ok(())
    }

    fn end_row(&mut self) -> Result<()> {
        self.layout.end_row();
        Ok(())
    }
}
