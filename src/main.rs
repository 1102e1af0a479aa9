use futures::future::try_join_all;

mod error;

mod config;

mod http;

mod routing;

mod server;

type JoinHandleList = Vec<tokio::task::JoinHandle<error::Result<()>>>;

fn main() {
    std::process::exit(match main_entry() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);

            1
        }
    })
}

fn main_entry() -> error::Result<i32> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let mut config_files = Vec::new();

    for arg in std::env::args().skip(1) {
        config_files.push(config::get_config_file(&arg)?);
    }

    let conf = config::load_server_config(config_files)?;

    log::debug!("{:#?}", conf);

    tokio::runtime::Builder::new_multi_thread()
        .enable_io()
        .enable_time()
        .worker_threads(conf.threads)
        .build()?
        .block_on(main_runtime(conf))
}

async fn main_runtime(conf: config::ServerConfig) -> error::Result<i32> {
    let router = routing::MakeRouter::new(conf.routes.into());
    let mut futures_list = JoinHandleList::new();

    for bind in conf.bind {
        match bind.to_sockaddr() {
            Ok(addr) => {
                futures_list.push(tokio::spawn(
                    server::serve(addr, router.clone())
                ));
            },
            Err(err) => {
                log::error!("{}", err);
            }
        }
    }

    if futures_list.is_empty() {
        log::error!("no valid interfaces to bind to");

        return Ok(1);
    }

    for result in try_join_all(futures_list).await? {
        result?;
    }

    Ok(0)
}
