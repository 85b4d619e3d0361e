use super::Vec3;

/// 4x4 matrix for instance transforms (column-major, as uploaded per instance)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    /// Translation * Rx * Ry * Rz * uniform scale, in one pass.
    ///
    /// `euler` uses XYZ order, matching scene-graph hosts that
    /// compose instance matrices from position/rotation/scale.
    pub fn compose(position: Vec3, euler: Vec3, scale: f32) -> Self {
        let (b, a) = euler.x.sin_cos();
        let (d, c) = euler.y.sin_cos();
        let (f, e) = euler.z.sin_cos();

        let ae = a * e;
        let af = a * f;
        let be = b * e;
        let bf = b * f;

        Self {
            data: [
                c * e * scale,
                (af + be * d) * scale,
                (bf - ae * d) * scale,
                0.0,
                -c * f * scale,
                (ae - bf * d) * scale,
                (be + af * d) * scale,
                0.0,
                d * scale,
                -b * c * scale,
                a * c * scale,
                0.0,
                position.x,
                position.y,
                position.z,
                1.0,
            ],
        }
    }

    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Mat4 {
        fn identity() -> Self {
            Self {
                data: [
                    1.0, 0.0, 0.0, 0.0,
                    0.0, 1.0, 0.0, 0.0,
                    0.0, 0.0, 1.0, 0.0,
                    0.0, 0.0, 0.0, 1.0,
                ],
            }
        }

        fn translation(x: f32, y: f32, z: f32) -> Self {
            let mut m = Self::identity();
            m.data[12] = x;
            m.data[13] = y;
            m.data[14] = z;
            m
        }

        fn rotation_x(angle: f32) -> Self {
            let c = angle.cos();
            let s = angle.sin();
            Self {
                data: [
                    1.0, 0.0, 0.0, 0.0,
                    0.0, c, s, 0.0,
                    0.0, -s, c, 0.0,
                    0.0, 0.0, 0.0, 1.0,
                ],
            }
        }

        fn rotation_y(angle: f32) -> Self {
            let c = angle.cos();
            let s = angle.sin();
            Self {
                data: [
                    c, 0.0, -s, 0.0,
                    0.0, 1.0, 0.0, 0.0,
                    s, 0.0, c, 0.0,
                    0.0, 0.0, 0.0, 1.0,
                ],
            }
        }

        fn rotation_z(angle: f32) -> Self {
            let c = angle.cos();
            let s = angle.sin();
            Self {
                data: [
                    c, s, 0.0, 0.0,
                    -s, c, 0.0, 0.0,
                    0.0, 0.0, 1.0, 0.0,
                    0.0, 0.0, 0.0, 1.0,
                ],
            }
        }

        /// Matrix multiplication
        fn mul(&self, other: &Mat4) -> Self {
            let mut result = [0.0f32; 16];

            for row in 0..4 {
                for col in 0..4 {
                    let mut sum = 0.0;
                    for k in 0..4 {
                        sum += self.data[row + k * 4] * other.data[k + col * 4];
                    }
                    result[row + col * 4] = sum;
                }
            }

            Self { data: result }
        }

        /// Transform a point (applies translation)
        fn transform_point(&self, p: Vec3) -> Vec3 {
            Vec3::new(
                self.data[0] * p.x + self.data[4] * p.y + self.data[8] * p.z + self.data[12],
                self.data[1] * p.x + self.data[5] * p.y + self.data[9] * p.z + self.data[13],
                self.data[2] * p.x + self.data[6] * p.y + self.data[10] * p.z + self.data[14],
            )
        }
    }

    fn assert_close(a: &Mat4, b: &Mat4) {
        for i in 0..16 {
            assert!(
                (a.data[i] - b.data[i]).abs() < 1e-5,
                "element {} differs: {} vs {}",
                i,
                a.data[i],
                b.data[i]
            );
        }
    }

    #[test]
    fn test_translation() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        let result = m.transform_point(Vec3::ZERO);
        assert!((result.x - 1.0).abs() < 0.0001);
        assert!((result.y - 2.0).abs() < 0.0001);
        assert!((result.z - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_rotation_z() {
        let m = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        let result = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((result.x).abs() < 0.0001);
        assert!((result.y - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_compose_identity() {
        assert_close(&Mat4::compose(Vec3::ZERO, Vec3::ZERO, 1.0), &Mat4::identity());
    }

    #[test]
    fn test_compose_matches_product() {
        let position = Vec3::new(1.0, -2.0, 0.5);
        let euler = Vec3::new(0.4, 1.1, -0.3);
        let scale = 0.35;

        let mut s = Mat4::identity();
        s.data[0] = scale;
        s.data[5] = scale;
        s.data[10] = scale;

        let expected = Mat4::translation(position.x, position.y, position.z)
            .mul(&Mat4::rotation_x(euler.x))
            .mul(&Mat4::rotation_y(euler.y))
            .mul(&Mat4::rotation_z(euler.z))
            .mul(&s);

        assert_close(&Mat4::compose(position, euler, scale), &expected);
    }

    #[test]
    fn test_compose_scales_then_translates() {
        let m = Mat4::compose(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, 2.0);
        let p = m.transform_point(Vec3::new(1.0, 1.0, 1.0));
        assert!((p.x - 2.0).abs() < 0.0001);
        assert!((p.y - 7.0).abs() < 0.0001);
        assert!((p.z - 2.0).abs() < 0.0001);
    }
}
