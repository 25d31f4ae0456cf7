//! Online exhibition viewer - web entry point

fn main() {
    dioxus::launch(exhibit_web::App);
}
