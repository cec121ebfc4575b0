use std::f32::consts::PI;

pub fn deg_to_rad(deg: f32) -> f32 {
    (PI / 180.0) * deg
}

pub fn rad_to_deg(rad: f32) -> f32 {
    (180.0 / PI) * rad
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        assert!((rad_to_deg(deg_to_rad(37.5)) - 37.5).abs() < 1e-4);
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-6);
    }
}
