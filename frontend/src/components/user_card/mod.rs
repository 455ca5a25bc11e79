use common::model::user::User;
use yew::{html, Component, Context, Html, Properties};

pub struct UserCardComponent;

#[derive(Properties, PartialEq)]
pub struct UserCardProps {
    pub user: User,
}

impl Component for UserCardComponent {
    type Message = ();
    type Properties = UserCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UserCardComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let user = &ctx.props().user;
        html! {
            <div class="info-card" data-testid="info-card">
                <div class="info-item">
                    <i class="material-icons">{"person"}</i>
                    <h1 class="info-item">{ user.row.name.clone() }</h1>
                </div>
                <div class="info-item">
                    <i class="material-icons">{"home"}</i>
                    <p class="info-item">{ user.location() }</p>
                </div>
                <div class="info-item">
                    <i class="material-icons">{"sports_basketball"}</i>
                    <p class="info-item">{ user.row.favorite_sport.clone() }</p>
                </div>
            </div>
        }
    }
}
