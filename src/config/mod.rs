use std::path::{Path, PathBuf};
use std::convert::{TryFrom, TryInto};
use std::net::{SocketAddr, IpAddr};

use shape::MapShape;

mod shape;
pub mod error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PING_PATH: &str = "/ping";
const DEFAULT_ECHO_PATH: &str = "/echo";

#[derive(Debug)]
pub struct BindInterfaceConfig {
    pub host: String,
    pub port: u16
}

impl BindInterfaceConfig {

    pub fn to_sockaddr(self) -> error::Result<SocketAddr> {
        let host = self.host;
        let ip: IpAddr = host.parse().map_err(
            |_err| error::Error::InvalidIpAddr(host)
        )?;

        Ok(SocketAddr::new(ip, self.port))
    }

}

#[derive(Debug)]
pub struct RoutesConfig {
    pub ping: String,
    pub echo: String,
}

fn validate_route(name: &str, path: String) -> error::Result<String> {
    if path.starts_with('/') {
        Ok(path)
    } else {
        Err(error::Error::InvalidConfig(
            format!("conf.routes.{} must start with \"/\". given: \"{}\"", name, path)
        ))
    }
}

impl TryFrom<Option<shape::RoutesShape>> for RoutesConfig {
    type Error = error::Error;

    fn try_from(value: Option<shape::RoutesShape>) -> error::Result<RoutesConfig> {
        let v = value.unwrap_or_default();
        let ping = validate_route("ping", v.ping.unwrap_or(DEFAULT_PING_PATH.to_owned()))?;
        let echo = validate_route("echo", v.echo.unwrap_or(DEFAULT_ECHO_PATH.to_owned()))?;

        if ping == echo {
            return Err(error::Error::InvalidConfig(
                format!("conf.routes.ping and conf.routes.echo cannot share a path. given: \"{}\"", ping)
            ));
        }

        Ok(RoutesConfig { ping, echo })
    }
}

#[derive(Debug)]
pub struct ServerConfig {
    pub bind: Vec<BindInterfaceConfig>,
    pub threads: usize,
    pub routes: RoutesConfig,
}

impl TryFrom<shape::ServerShape> for ServerConfig {
    type Error = error::Error;

    fn try_from(server_shape: shape::ServerShape) -> error::Result<ServerConfig> {
        let port = server_shape.port.unwrap_or(DEFAULT_PORT);
        let bind = if let Some(interfaces) = server_shape.bind {
            interfaces.into_iter()
                .map(|inter| BindInterfaceConfig {
                    host: inter.host,
                    port: inter.port.unwrap_or(port)
                })
                .collect()
        } else {
            vec![BindInterfaceConfig {
                host: DEFAULT_HOST.to_owned(),
                port
            }]
        };

        let threads = server_shape.threads.unwrap_or_else(num_cpus::get);

        if threads == 0 {
            return Err(error::Error::InvalidConfig(
                "conf.threads must be greater than 0".to_owned()
            ));
        }

        Ok(ServerConfig {
            bind,
            threads,
            routes: server_shape.routes.try_into()?,
        })
    }
}

/// loads each file in order, later files overriding earlier ones
pub fn load_server_config(files: Vec<PathBuf>) -> error::Result<ServerConfig> {
    let mut base_shape = shape::ServerShape::default();

    for file in files {
        let shape = shape::ServerShape::try_from(file.as_path())?;

        base_shape.map_shape(shape);
    }

    base_shape.try_into()
}

pub fn get_config_file<P>(path: P) -> error::Result<PathBuf>
where
    P: AsRef<Path>
{
    let path = path.as_ref();

    if let Ok(cannonical_path) = std::fs::canonicalize(path) {
        if !cannonical_path.is_file() {
            Err(error::Error::InvalidFile(cannonical_path.into_os_string()))
        } else {
            Ok(cannonical_path)
        }
    } else {
        Err(error::Error::FileNotFound(path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{error::Error, get_config_file, load_server_config};

    struct TempFile(PathBuf);

    impl TempFile {
        fn new(name: &str, contents: &str) -> TempFile {
            let path = std::env::temp_dir().join(format!(
                "ping-echo-{}-{}", std::process::id(), name
            ));
            std::fs::write(&path, contents).unwrap();
            TempFile(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn defaults_without_files() {
        let conf = load_server_config(Vec::new()).unwrap();

        assert_eq!(conf.bind.len(), 1);
        assert_eq!(conf.bind[0].host, "127.0.0.1");
        assert_eq!(conf.bind[0].port, 8080);
        assert!(conf.threads > 0);
        assert_eq!(conf.routes.ping, "/ping");
        assert_eq!(conf.routes.echo, "/echo");
    }

    #[test]
    fn files_merge_in_order() {
        let yaml = TempFile::new("base.yaml", "
port: 9000
threads: 3
bind:
  - host: 0.0.0.0
  - host: \"::1\"
    port: 9443
routes:
  ping: /healthz
");
        let json = TempFile::new("override.json", r#"{"threads": 1, "routes": {"echo": "/say"}}"#);

        let conf = load_server_config(vec![yaml.0.clone(), json.0.clone()]).unwrap();
        let addrs: Vec<String> = conf.bind.into_iter()
            .map(|b| b.to_sockaddr().unwrap().to_string())
            .collect();

        assert_eq!(addrs, vec!["0.0.0.0:9000", "[::1]:9443"]);
        assert_eq!(conf.threads, 1);
        assert_eq!(conf.routes.ping, "/healthz");
        assert_eq!(conf.routes.echo, "/say");
    }

    #[test]
    fn invalid_values_test() {
        let candidates = vec![
            ("zero-threads.yaml", "threads: 0"),
            ("relative.yaml", "routes:\n  ping: ping"),
            ("shared.yaml", "routes:\n  ping: /same\n  echo: /same"),
        ];

        for (name, contents) in candidates {
            let file = TempFile::new(name, contents);
            let result = load_server_config(vec![file.0.clone()]);

            assert!(
                matches!(result, Err(Error::InvalidConfig(_))),
                "file: {} result: {:?}", name, result
            );
        }
    }

    #[test]
    fn file_errors_test() {
        let toml = TempFile::new("server.toml", "port = 1");
        let bare = TempFile::new("server", "port: 1");
        let broken = TempFile::new("broken.json", "{\"port\": ");

        assert!(matches!(load_server_config(vec![toml.0.clone()]), Err(Error::InvalidExtension(_))));
        assert!(matches!(load_server_config(vec![bare.0.clone()]), Err(Error::UnknownExtension)));
        assert!(matches!(load_server_config(vec![broken.0.clone()]), Err(Error::JsonError(_))));
        assert!(matches!(
            get_config_file("/definitely/not/here.yaml"),
            Err(Error::FileNotFound(_))
        ));
        assert!(matches!(get_config_file(std::env::temp_dir()), Err(Error::InvalidFile(_))));
        assert!(get_config_file(&toml.0).is_ok());
    }

    #[test]
    fn invalid_bind_host() {
        let file = TempFile::new("host.yaml", "bind:\n  - host: localhost");
        let mut conf = load_server_config(vec![file.0.clone()]).unwrap();
        let bind = conf.bind.remove(0);

        assert!(matches!(bind.to_sockaddr(), Err(Error::InvalidIpAddr(_))));
    }
}
