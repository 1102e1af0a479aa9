use std::path::Path;
use std::convert::TryFrom;

use serde::Deserialize;

use crate::config::error;

/// field by field merging of partially specified config. a value present
/// on the right hand side replaces the one on the left.
pub trait MapShape {
    fn map_shape(&mut self, rhs: Self);
}

impl<T> MapShape for Option<T> {
    fn map_shape(&mut self, rhs: Self) {
        if rhs.is_some() {
            *self = rhs;
        }
    }
}

/// merges nested shapes instead of replacing the whole struct
pub fn assign_map_struct<T>(lhs: &mut Option<T>, rhs: Option<T>)
where
    T: MapShape
{
    if let Some(rhs) = rhs {
        if let Some(lhs) = lhs.as_mut() {
            lhs.map_shape(rhs);
        } else {
            *lhs = Some(rhs);
        }
    }
}

#[derive(Deserialize, Default)]
pub struct RoutesShape {
    pub ping: Option<String>,
    pub echo: Option<String>,
}

impl MapShape for RoutesShape {
    fn map_shape(&mut self, rhs: Self) {
        self.ping.map_shape(rhs.ping);
        self.echo.map_shape(rhs.echo);
    }
}

#[derive(Deserialize)]
pub struct BindInterfaceShape {
    pub host: String,
    pub port: Option<u16>
}

#[derive(Deserialize, Default)]
pub struct ServerShape {
    pub bind: Option<Vec<BindInterfaceShape>>,
    pub port: Option<u16>,

    pub threads: Option<usize>,

    pub routes: Option<RoutesShape>,
}

impl MapShape for ServerShape {
    fn map_shape(&mut self, rhs: Self) {
        self.bind.map_shape(rhs.bind);
        self.port.map_shape(rhs.port);
        self.threads.map_shape(rhs.threads);

        assign_map_struct(&mut self.routes, rhs.routes);
    }
}

impl TryFrom<&Path> for ServerShape {
    type Error = error::Error;

    fn try_from(config_file: &Path) -> Result<ServerShape, Self::Error> {
        if let Some(ext) = config_file.extension() {
            let ext = ext.to_ascii_lowercase();
            let reader = || -> error::Result<std::io::BufReader<std::fs::File>> {
                Ok(std::io::BufReader::new(std::fs::File::open(config_file)?))
            };

            if ext.eq("yaml") || ext.eq("yml") {
                Ok(serde_yaml::from_reader(reader()?)?)
            } else if ext.eq("json") {
                Ok(serde_json::from_reader(reader()?)?)
            } else {
                Err(error::Error::InvalidExtension(ext))
            }
        } else {
            Err(error::Error::UnknownExtension)
        }
    }
}
