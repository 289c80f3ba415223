use rocket::fairing::AdHoc;

pub mod staking;

pub fn mount() -> AdHoc {
    AdHoc::on_ignite("Attaching Routes", |rocket| async {
        rocket.mount(
            "/",
            routes![
                staking::get_all,
                staking::get_by_protocol,
                staking::get_by_address,
                staking::update
            ],
        )
    })
}
