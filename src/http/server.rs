use std::io::Error;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::http::routes;
use crate::logger;
use crate::utils::logger::Logger;

pub struct ServerInstance {
    pub socket: TcpListener,
    pub router: Router,
}

impl ServerInstance {
    /// Binds the listener and assembles the route table.
    pub async fn create_instance(host: &str, port: u16) -> Result<ServerInstance, Error> {
        match TcpListener::bind((host, port)).await {
            Ok(socket) => {
                logger!(INFO, "Server connection open: {host}:{port}");
                Ok(ServerInstance {
                    socket,
                    router: ServerInstance::routes(),
                })
            }
            Err(error) => Err(error),
        }
    }

    fn routes() -> Router {
        Router::new().route("/api/swudbdeck", get(routes::import_deck))
    }

    pub async fn run(self) -> Result<(), Error> {
        axum::serve(self.socket, self.router).await
    }
}
