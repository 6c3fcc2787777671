use lambda_runtime::{run, service_fn};
use todo_relay::Relay;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("todo_relay")).init();

    // One client for the lifetime of the execution environment; invocations
    // share only its connection pool.
    let relay = &Relay::new();

    run(service_fn(move |event| async move {
        relay
            .handle(event)
            .await
            .map_err(lambda_runtime::Error::from)
    }))
    .await
}
