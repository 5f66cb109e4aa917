use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use barpath_mesh::TriangleMesh;

/// Failures surfaced by OBJ export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no output destination was given")]
    NoDestination,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Writes `mesh` as Wavefront OBJ text.
///
/// Emits one `v x y z` line per vertex followed by one `f i j k` line per
/// facet, both in construction order. OBJ face indices are 1-based.
pub fn write_obj<M: TriangleMesh, W: Write>(mesh: &M, writer: &mut W) -> io::Result<()> {
    for v in mesh.points() {
        writeln!(writer, "v {:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
    }
    for f in mesh.facets() {
        writeln!(writer, "f {} {} {}", f.p0 + 1, f.p1 + 1, f.p2 + 1)?;
    }
    Ok(())
}

/// Serializes `mesh` to `destination`.
///
/// A missing destination is a user-facing error, not a silent no-op: the
/// caller is expected to surface [`ExportError::NoDestination`] when no
/// save path was chosen.
pub fn export_obj<M: TriangleMesh>(mesh: &M, destination: Option<&Path>) -> Result<(), ExportError> {
    let Some(path) = destination else {
        return Err(ExportError::NoDestination);
    };
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}
