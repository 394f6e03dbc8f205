use moon::*;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("DevPort")
        .append_to_head(r#"<meta name="description" content="Developer portfolio">"#)
}

async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_| {}).await
}
