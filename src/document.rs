//! Minimal SVG documents holding stroked paths.

use std::fmt;
use std::io::{self, Write};

use kurbo::Size;
use log::info;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::Path;
use crate::util;

/// Stroke width of every path element.
const STROKE_WIDTH: u32 = 2;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// The palette strokes are drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", rename_all = "lowercase")
)]
pub enum StrokeColor {
    Black,
    Red,
    Blue,
    Green,
}

/// An SVG document: a canvas and a list of stroked, unfilled paths.
#[derive(Clone, Debug)]
pub struct Document {
    size: Size,
    paths: Vec<(Path, StrokeColor)>,
}

impl StrokeColor {
    pub const PALETTE: [StrokeColor; 4] = [
        StrokeColor::Black,
        StrokeColor::Red,
        StrokeColor::Blue,
        StrokeColor::Green,
    ];

    /// The SVG color keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            StrokeColor::Black => "black",
            StrokeColor::Red => "red",
            StrokeColor::Blue => "blue",
            StrokeColor::Green => "green",
        }
    }
}

impl fmt::Display for StrokeColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Distribution<StrokeColor> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> StrokeColor {
        StrokeColor::PALETTE[rng.gen_range(0, StrokeColor::PALETTE.len())]
    }
}

impl Document {
    /// An empty document with the given canvas size.
    pub fn new(size: Size) -> Document {
        Document {
            size,
            paths: Vec::new(),
        }
    }

    /// A document where each path gets a stroke color drawn from `rng`,
    /// in order.
    pub fn with_random_strokes<'a, R, I>(paths: I, size: Size, rng: &mut R) -> Document
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Path>,
    {
        let mut doc = Document::new(size);
        for path in paths {
            let stroke = rng.gen();
            doc.push(path.clone(), stroke);
        }
        doc
    }

    pub fn push(&mut self, path: Path, stroke: StrokeColor) {
        self.paths.push((path, stroke));
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn paths(&self) -> &[(Path, StrokeColor)] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Serialize the document as SVG.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(
            writer,
            r#"<svg xmlns="{}" width="{}" height="{}">"#,
            SVG_NS, self.size.width, self.size.height
        )?;
        for (path, stroke) in &self.paths {
            writeln!(
                writer,
                r#"  <path d="{}" stroke="{}" fill="none" stroke-width="{}"/>"#,
                path, stroke, STROKE_WIDTH
            )?;
        }
        writeln!(writer, "</svg>")
    }

    pub fn to_svg(&self) -> String {
        let mut buf = Vec::new();
        self.write_to(&mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("SVG output is UTF-8")
    }

    /// Write the document to `destination`, replacing any existing file.
    pub fn save(&self, destination: impl AsRef<std::path::Path>) -> Result<()> {
        let destination = destination.as_ref();
        util::write_file(destination, |w| self.write_to(w))?;
        info!(
            "wrote {} paths to {}",
            self.paths.len(),
            destination.display()
        );
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Document {
        Document::new(Size::new(500.0, 500.0))
    }
}

/// Write `paths` as an SVG document, choosing a random stroke for each.
pub fn write_svg<R: Rng + ?Sized>(
    paths: &[Path],
    destination: impl AsRef<std::path::Path>,
    size: Size,
    rng: &mut R,
) -> Result<()> {
    Document::with_random_strokes(paths, size, rng).save(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::PathComposer;
    use crate::error::Error;
    use kurbo::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("fakepath-{}-{}", std::process::id(), name))
    }

    #[test]
    fn empty_document() {
        let dest = temp_file("empty.svg");
        let mut rng = StdRng::seed_from_u64(0);
        write_svg(&[], &dest, Size::new(500.0, 500.0), &mut rng).unwrap();
        let text = std::fs::read_to_string(&dest).unwrap();
        std::fs::remove_file(&dest).unwrap();
        assert_eq!(
            text,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"500\" height=\"500\">\n</svg>\n"
        );
    }

    #[test]
    fn one_element_per_path() {
        let composer = PathComposer::new();
        let paths: Vec<Path> = (0..25).map(|seed| composer.compose_seeded(3, seed)).collect();
        let dest = temp_file("many.svg");
        let mut rng = StdRng::seed_from_u64(4);
        write_svg(&paths, &dest, Size::new(640.0, 480.0), &mut rng).unwrap();
        let text = std::fs::read_to_string(&dest).unwrap();
        std::fs::remove_file(&dest).unwrap();

        assert!(text.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="480">"#
        ));
        let elements: Vec<&str> = text
            .lines()
            .filter(|l| l.trim_start().starts_with("<path"))
            .collect();
        assert_eq!(elements.len(), paths.len());
        for (line, path) in elements.iter().zip(&paths) {
            assert!(line.contains(&format!(r#"d="{}""#, path)));
            assert!(line.contains(r#"fill="none""#));
            assert!(line.contains(r#"stroke-width="2""#));
            assert!(StrokeColor::PALETTE
                .iter()
                .any(|c| line.contains(&format!(r#" stroke="{}""#, c))));
        }
    }

    #[test]
    fn overwrites_existing_file() {
        let dest = temp_file("overwrite.svg");
        std::fs::write(&dest, "x".repeat(10_000)).unwrap();
        let mut doc = Document::default();
        doc.push(Path::new(Point::new(1.0, 2.0)), StrokeColor::Blue);
        doc.save(&dest).unwrap();
        let text = std::fs::read_to_string(&dest).unwrap();
        std::fs::remove_file(&dest).unwrap();
        assert_eq!(text, doc.to_svg());
        assert!(text.contains(r#"  <path d="M1,2" stroke="blue" fill="none" stroke-width="2"/>"#));
    }

    #[test]
    fn unwritable_destination() {
        let dest = temp_file("missing-dir").join("out.svg");
        let mut rng = StdRng::seed_from_u64(0);
        match write_svg(&[], &dest, Size::new(1.0, 1.0), &mut rng) {
            Err(Error::Io { path, .. }) => assert_eq!(path, dest),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn strokes_cover_palette() {
        let paths = vec![Path::new(Point::ORIGIN); 64];
        let mut rng = StdRng::seed_from_u64(12);
        let doc = Document::with_random_strokes(&paths, Size::new(10.0, 10.0), &mut rng);
        assert_eq!(doc.len(), 64);
        for color in StrokeColor::PALETTE.iter() {
            assert!(doc.paths().iter().any(|(_, c)| c == color));
        }
    }
}
