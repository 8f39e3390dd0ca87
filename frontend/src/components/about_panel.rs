use web_sys::MouseEvent;
use yew::prelude::*;

#[function_component(AboutPanel)]
pub fn about_panel() -> Html {
    let expanded = use_state(|| false);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| {
            expanded.set(!*expanded);
        })
    };

    html! {
        <div class="panel about-panel">
            <h2 class="panel-title">{"Nossa Arte"}</h2>
            <p class="about-quote">
                {"\"Transformamos eventos em experiências memoráveis, onde cada drink conta uma história.\""}
            </p>
            <div class="divider"></div>

            <div class="about-body">
                <p>
                    {"À frente da "}<strong>{"Milano Bartenders"}</strong>{", os fundadores "}
                    <strong>{"Victor Glitz e Thalisson Santos"}</strong>
                    {" unem técnica e criatividade para criar momentos únicos há mais de uma década."}
                </p>
                <p>
                    {"Especialistas em celebrações de alto padrão, somos referência em requinte com inovações como o "}
                    <strong>{"Welcome Drink personalizado e bolhas aromáticas"}</strong>{"."}
                </p>
            </div>

            <div class={classes!("collapsible", (*expanded).then_some("expanded"))}>
                <div class="about-body">
                    <p>{"Com um olhar atento a cada detalhe, dedicam-se à arte da coquetelaria com excelência e sofisticação."}</p>
                    <p>
                        {"Mais do que servir coquetéis, nossa missão é criar atmosferas, despertar sensações e elevar cada evento à sua melhor versão. "}
                        {"Seja em casamentos, aniversários, formaturas ou eventos corporativos, oferecemos serviços de bar exclusivos com drinks autorais e apresentação impecável."}
                    </p>
                </div>
            </div>

            <button type="button" class="text-button" onclick={toggle}>
                {if *expanded { "Ler menos" } else { "Ler mais..." }}
            </button>

            <div class="divider"></div>
            <p class="about-signature">{"✨ Milano Bartenders — a arte de brindar com elegância."}</p>
        </div>
    }
}
