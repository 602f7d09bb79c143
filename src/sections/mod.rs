// Landing page sections, one module per block on the page.

mod console_brand;
mod contact;
mod footer;
mod hero;
mod nav;
mod policy;
mod process;
mod products;
mod services;
mod ui;

pub use console_brand::ConsoleBrand;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use policy::Policy;
pub use process::Process;
pub use products::Products;
pub use services::Services;
