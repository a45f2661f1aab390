mod tests {
    use fire_strips::math8::{blend8, diffuse8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
        assert_eq!(scale8(255, 240), 240);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_diffuse8() {
        assert_eq!(diffuse8(0, 0), 0);
        assert_eq!(diffuse8(255, 255), 255);
        assert_eq!(diffuse8(10, 20), 16);
        assert_eq!(diffuse8(0, 255), 170);
        assert_eq!(diffuse8(255, 0), 85);
    }
}
