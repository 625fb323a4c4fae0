use std::io;

use crate::models::Scene;

/// 编译期嵌入的默认场景
const BUNDLED_SCENE: &str = include_str!("../assets/scene.toml");

/// 加载内置场景
pub fn load_scene() -> io::Result<Scene> {
    parse_scene(BUNDLED_SCENE)
}

/// 从 TOML 文本解析并校验场景
pub fn parse_scene(content: &str) -> io::Result<Scene> {
    let scene: Scene =
        toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    validate(&scene)?;
    Ok(scene)
}

fn invalid(msg: &str) -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::InvalidData, msg.to_string()))
}

fn validate(scene: &Scene) -> io::Result<()> {
    if scene.message.single.trim().is_empty() {
        return invalid("message.single 不能为空");
    }
    if scene.message.split.len() != 2 || scene.message.split.iter().any(|w| w.trim().is_empty()) {
        return invalid("message.split 必须恰好包含两个非空单词");
    }
    if scene.timing.fps == 0 {
        return invalid("timing.fps 必须大于 0");
    }
    if scene.shape.x_span <= 0.0 || scene.shape.y_span <= 0.0 || scene.shape.y_squash <= 0.0 {
        return invalid("shape 中的跨度必须为正数");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;

    #[test]
    fn test_bundled_scene_loads() {
        let scene = load_scene().unwrap();
        assert_eq!(scene.message.single, "happy birthday");
        assert_eq!(scene.message.split, vec!["happy", "birthday"]);
        assert_eq!(scene.timing.fps, 28);
        assert_eq!(scene.shape.x_span, 1.6);
        assert_eq!(scene.shape.y_span, 1.25);
        assert_eq!(scene.palette.top, Rgb(255, 45, 85));
        assert_eq!(scene.palette.bottom, Rgb(255, 142, 163));
        assert_eq!(scene.palette.contrast_threshold, 155.0);
    }

    #[test]
    fn test_rejects_bad_split() {
        let content = BUNDLED_SCENE.replace(
            r#"split = ["happy", "birthday"]"#,
            r#"split = ["happy"]"#,
        );
        let err = parse_scene(&content).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_rejects_zero_fps() {
        let content = BUNDLED_SCENE.replace("fps = 28", "fps = 0");
        assert!(parse_scene(&content).is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = parse_scene("[message\nsingle = ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
