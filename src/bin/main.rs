use anyhow::Error;
use openfrp::endpoints;
use reqwest::Client;
use structopt::StructOpt;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::from_args();

    log::debug!("Starting application with {:#?}", args);

    let mut builder = Client::builder()
        .user_agent(openfrp::DEFAULT_USER_AGENT)
        .cookie_store(true);

    // one outbound proxy for every request this client ever makes
    if let Some(ref proxy) = args.proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
    }

    let client = builder.build()?;

    // send a login request and get our user session
    let session =
        endpoints::login(&client, &args.host, &args.username, &args.password)
            .await?;

    let user_info =
        endpoints::get_user_info(&client, &args.host, &session).await?;
    println!("{}", user_info);

    let nodes = endpoints::node_list(&client, &args.host, &session).await?;
    log::info!("{} nodes available", nodes.len());
    log::debug!("{:#?}", nodes);

    let proxies =
        endpoints::get_user_proxies(&client, &args.host, &session).await?;
    for proxy in &proxies.list {
        println!("Tunnel {}: {}", proxy.id, proxy.name);
    }

    // the daily check-in tops up the traffic quota
    let message = endpoints::sign_in(&client, &args.host, &session).await?;
    println!("{}", message);

    Ok(())
}

#[derive(Debug, StructOpt)]
struct Args {
    #[structopt(
        long = "host",
        default_value = "of-dev-api.bfsea.xyz",
        help = "The OpenFrp server's hostname"
    )]
    host: String,
    #[structopt(short = "u", long = "username", help = "Your username")]
    username: String,
    #[structopt(short = "p", long = "password", help = "Your password")]
    password: String,
    #[structopt(
        long = "proxy",
        help = "An outbound proxy to route every request through"
    )]
    proxy: Option<String>,
}
