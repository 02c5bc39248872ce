use crate::consts;
use enum_map::{Enum, EnumMap};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Colors for drawing the things on the board
    #[serde(default)]
    pub(crate) colors: Palette,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("wrapsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                log::debug!("No configuration file at {}; using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

/// The kinds of things drawn on the board
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Entity {
    SnakeHead,
    SnakeBody,
    Food,
    BonusFood,
    Obstacle,
}

impl Entity {
    /// Name of the entity's key in the `[colors]` table
    fn key(self) -> &'static str {
        match self {
            Entity::SnakeHead => "snake-head",
            Entity::SnakeBody => "snake-body",
            Entity::Food => "food",
            Entity::BonusFood => "bonus-food",
            Entity::Obstacle => "obstacle",
        }
    }

    fn default_color(self) -> Color {
        match self {
            Entity::SnakeHead => consts::SNAKE_HEAD_COLOR,
            Entity::SnakeBody => consts::SNAKE_BODY_COLOR,
            Entity::Food => consts::FOOD_COLOR,
            Entity::BonusFood => consts::BONUS_FOOD_COLOR,
            Entity::Obstacle => consts::OBSTACLE_COLOR,
        }
    }
}

/// The color used for each kind of thing on the board
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawPalette")]
pub(crate) struct Palette(EnumMap<Entity, Color>);

impl Palette {
    pub(crate) fn get(&self, entity: Entity) -> Color {
        self.0[entity]
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette(EnumMap::from_fn(Entity::default_color))
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawPalette {
    snake_head: Option<String>,
    snake_body: Option<String>,
    food: Option<String>,
    bonus_food: Option<String>,
    obstacle: Option<String>,
}

impl TryFrom<RawPalette> for Palette {
    type Error = PaletteError;

    fn try_from(value: RawPalette) -> Result<Palette, PaletteError> {
        let mut palette = Palette::default();
        for (entity, color) in [
            (Entity::SnakeHead, value.snake_head),
            (Entity::SnakeBody, value.snake_body),
            (Entity::Food, value.food),
            (Entity::BonusFood, value.bonus_food),
            (Entity::Obstacle, value.obstacle),
        ] {
            if let Some(color) = color {
                palette.0[entity] = Color::from_str(&color).map_err(|_| PaletteError {
                    entity,
                    value: color,
                })?;
            }
        }
        Ok(palette)
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid color {value:?} for {}", .entity.key())]
pub(crate) struct PaletteError {
    entity: Entity,
    value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_config() {
        let cfg = toml::from_str::<Config>("").expect("empty config should parse");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.colors.get(Entity::Food), Color::Red);
        assert_eq!(cfg.colors.get(Entity::BonusFood), Color::Rgb(255, 215, 0));
    }

    #[test]
    fn partial_colors() {
        let cfg = toml::from_str::<Config>(concat!(
            "[colors]\n",
            "snake-head = \"lightred\"\n",
            "obstacle = \"#336699\"\n",
        ))
        .expect("config should parse");
        assert_eq!(cfg.colors.get(Entity::SnakeHead), Color::LightRed);
        assert_eq!(cfg.colors.get(Entity::Obstacle), Color::Rgb(0x33, 0x66, 0x99));
        assert_eq!(cfg.colors.get(Entity::SnakeBody), consts::SNAKE_BODY_COLOR);
        assert_eq!(cfg.colors.get(Entity::Food), consts::FOOD_COLOR);
    }

    #[rstest]
    #[case("[colors]\nfood = \"not-a-color\"\n", "invalid color \"not-a-color\" for food")]
    #[case("[colors]\nbonus-food = \"\"\n", "invalid color \"\" for bonus-food")]
    #[case("[colors]\nsnake = \"green\"\n", "unknown field `snake`")]
    #[case("[colors]\nfood = 7\n", "invalid type")]
    fn bad_colors(#[case] src: &str, #[case] msg: &str) {
        let e = toml::from_str::<Config>(src).expect_err("config should not parse");
        assert!(e.to_string().contains(msg), "{e} does not mention {msg:?}");
    }

    #[test]
    fn palette_error_display() {
        let e = PaletteError {
            entity: Entity::SnakeBody,
            value: String::from("mauve"),
        };
        assert_eq!(e.to_string(), "invalid color \"mauve\" for snake-body");
    }

    mod load {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn from_file() {
            let tmpdir = tempfile::tempdir().expect("should be able to create tempdir");
            let path = tmpdir.path().join("config.toml");
            fs_err::write(&path, "[colors]\nfood = \"magenta\"\n")
                .expect("should be able to write config file");
            let cfg = Config::load(&path, false).expect("config should load");
            assert_eq!(cfg.colors.get(Entity::Food), Color::Magenta);
        }

        #[test]
        fn missing_allowed() {
            let tmpdir = tempfile::tempdir().expect("should be able to create tempdir");
            let path = tmpdir.path().join("nonexistent.toml");
            let cfg = Config::load(&path, true).expect("missing config should be allowed");
            assert_eq!(cfg, Config::default());
        }

        #[test]
        fn missing_not_allowed() {
            let tmpdir = tempfile::tempdir().expect("should be able to create tempdir");
            let path = tmpdir.path().join("nonexistent.toml");
            let r = Config::load(&path, false);
            assert!(matches!(r, Err(ConfigError::Read(_))), "{r:?}");
        }

        #[test]
        fn unparseable() {
            let tmpdir = tempfile::tempdir().expect("should be able to create tempdir");
            let path = tmpdir.path().join("config.toml");
            fs_err::write(&path, "colors = [").expect("should be able to write config file");
            let r = Config::load(&path, false);
            assert!(matches!(r, Err(ConfigError::Parse(_))), "{r:?}");
        }
    }
}
