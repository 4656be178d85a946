use clap::Parser;

use camgate::{CameraConfig, ProxyConfig, ServerConfig, StreamServer};

// Deployment constants for the dual-Arducam rig: two IMX477 sensors on the
// board's i2c buses, plus one remote camera reached over the local network.
const CAM0_DEVICE: &str = "/base/axi/pcie@1000120000/rp1/i2c@88000/imx477@1a";
const CAM1_DEVICE: &str = "/base/axi/pcie@1000120000/rp1/i2c@80000/imx477@1a";
const REMOTE_CAMERA: &str = "rtsp://192.168.144.25:8554/main.264";

#[derive(Parser)]
#[command(
    name = "camgate-server",
    about = "RTSP gateway for two local cameras and a remote camera proxy"
)]
struct Args {
    /// Listen address
    #[arg(long, default_value = camgate::DEFAULT_ADDRESS)]
    address: String,

    /// Listen port
    #[arg(long, default_value_t = camgate::DEFAULT_PORT)]
    port: u16,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("camgate failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> camgate::Result<()> {
    camgate::init()?;

    let server = StreamServer::new(&ServerConfig {
        address: args.address.clone(),
        port: args.port,
    });

    server.add_camera("/cam0", &CameraConfig::new(CAM0_DEVICE))?;
    server.add_camera("/cam1", &CameraConfig::new(CAM1_DEVICE))?;
    server.add_proxy("/cam2", &ProxyConfig::new(REMOTE_CAMERA))?;

    println!("RTSP server ready, streams:");
    for endpoint in server.endpoints() {
        println!("  rtsp://{}:{}{}", args.address, args.port, endpoint.path);
    }

    server.run()
}
