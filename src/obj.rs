use std::fs::File;
use std::io::{BufRead, BufReader};
use anyhow::{Context, Result, anyhow, bail};
use crate::point2d::Point2D;
use crate::point3d::Point3D;

/// Triangle mesh in the layout the renderer consumes.
///
/// `positions` holds the unique vertices and `indices` flattened index
/// triples into it. `uvs` and `normals` are face-expanded: one entry per
/// triangle corner, in lockstep with `indices`, because the source format
/// lets the same vertex carry different attributes on different faces.
#[derive(Debug, Default)]
pub struct Mesh {
    pub positions: Vec<Point3D>,
    pub indices: Vec<usize>,
    pub normals: Vec<Point3D>,
    pub uvs: Vec<Point2D>,
}

pub fn parse_obj(path: &str) -> Result<Mesh> {
    let file = File::open(path).with_context(|| format!("cannot open mesh file {path}"))?;
    parse(BufReader::new(file))
}

/// Line-oriented OBJ subset: `v`, `vt`, `vn`, and triangulated `f` records.
/// Comments and unknown record tags are skipped. Faces resolve uv/normal
/// indices against the pools immediately, so an attribute index with no
/// matching `vt`/`vn` record fails the whole load. Position indices are kept
/// raw and only checked when the mesh is projected.
pub fn parse<R: BufRead>(reader: R) -> Result<Mesh> {
    let mut raw_uvs: Vec<Point2D> = Vec::new();
    let mut raw_normals: Vec<Point3D> = Vec::new();
    let mut mesh = Mesh::default();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_index + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() || tokens[0].starts_with('#') {
            continue
        }

        match tokens[0] {
            "v" => {
                if tokens.len() < 4 {
                    bail!("line {line_no}: 'v' record needs 3 coordinates");
                }
                let x = tokens[1].parse()?;
                let y = tokens[2].parse()?;
                let z = tokens[3].parse()?;
                mesh.positions.push(Point3D { x, y, z })
            }
            "vt" => {
                if tokens.len() < 3 {
                    bail!("line {line_no}: 'vt' record needs 2 coordinates");
                }
                let u = tokens[1].parse()?;
                let v = tokens[2].parse()?;
                raw_uvs.push(Point2D { x: u, y: v })
            }
            "vn" => {
                if tokens.len() < 4 {
                    bail!("line {line_no}: 'vn' record needs 3 coordinates");
                }
                let x = tokens[1].parse()?;
                let y = tokens[2].parse()?;
                let z = tokens[3].parse()?;
                raw_normals.push(Point3D { x, y, z })
            }
            "f" => {
                if tokens.len() != 4 {
                    bail!("line {line_no}: faces must have exactly 3 corners");
                }
                for corner in &tokens[1..4] {
                    let (v, vt, vn) = parse_face_corner(corner)
                        .with_context(|| format!("line {line_no}: bad face corner '{corner}'"))?;
                    mesh.indices.push(v);
                    mesh.uvs.push(*raw_uvs.get(vt).ok_or_else(|| {
                        anyhow!("line {line_no}: uv index {} has no 'vt' record", vt + 1)
                    })?);
                    mesh.normals.push(*raw_normals.get(vn).ok_or_else(|| {
                        anyhow!("line {line_no}: normal index {} has no 'vn' record", vn + 1)
                    })?);
                }
            }
            _ => {}
        }
    }

    Ok(mesh)
}

/// One `pos/uv/normal` corner descriptor, 1-based in the file, 0-based out.
fn parse_face_corner(s: &str) -> Result<(usize, usize, usize)> {
    let mut fields = s.split('/');
    let v = index_field(fields.next())?;
    let vt = index_field(fields.next())?;
    let vn = index_field(fields.next())?;
    Ok((v, vt, vn))
}

fn index_field(field: Option<&str>) -> Result<usize> {
    let raw: i64 = field.ok_or_else(|| anyhow!("missing index field"))?.parse()?;
    // The format is strictly 1-based; relative (negative) indexing is not
    // part of the subset this renderer accepts.
    if raw < 1 {
        bail!("index {raw} is not 1-based");
    }
    Ok((raw - 1) as usize)
}
