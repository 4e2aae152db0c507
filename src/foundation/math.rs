/// Column-major 4x4 affine transform used by the matrix stack of the graphics context.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mat4(pub [f64; 16]);

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    fn at(&self, row: usize, col: usize) -> f64 {
        self.0[col * 4 + row]
    }

    /// `self * rhs`: `rhs` is applied first.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = acc;
            }
        }
        Self(out)
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.0[12] = x;
        m.0[13] = y;
        m.0[14] = z;
        m
    }

    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.0[0] = x;
        m.0[5] = y;
        m.0[10] = z;
        m
    }

    /// Rotation by Euler angles (radians), applied X then Y then Z.
    pub fn rotation(x: f64, y: f64, z: f64) -> Self {
        let (sx, cx) = x.sin_cos();
        let (sy, cy) = y.sin_cos();
        let (sz, cz) = z.sin_cos();

        #[rustfmt::skip]
        let rx = Self([
            1.0, 0.0, 0.0, 0.0,
            0.0, cx,  sx,  0.0,
            0.0, -sx, cx,  0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        #[rustfmt::skip]
        let ry = Self([
            cy,  0.0, -sy, 0.0,
            0.0, 1.0, 0.0, 0.0,
            sy,  0.0, cy,  0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        #[rustfmt::skip]
        let rz = Self([
            cz,  sz,  0.0, 0.0,
            -sz, cz,  0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);

        rz.mul(&ry).mul(&rx)
    }

    /// Transform a point (w = 1).
    pub fn transform_point(&self, p: [f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for (row, o) in out.iter_mut().enumerate() {
            *o = self.at(row, 0) * p[0] + self.at(row, 1) * p[1] + self.at(row, 2) * p[2]
                + self.at(row, 3);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
