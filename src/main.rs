use rent_dashboard::components::Dashboard;

fn main() {
    yew::Renderer::<Dashboard>::new().render();
}
