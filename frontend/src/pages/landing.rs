use chrono::Datelike;
use yew::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::components::reveal::{stagger_delay, Motion, Reveal};
use crate::config::{contact, images};
use crate::content::{
    ordinal, BENEFITS, GATHERINGS, INVITATIONS, MISSION_VALUES, OFFERINGS, PILLARS, SAFE_SPACE,
};
use crate::controller::navigator::link_to;
use crate::controller::section::Section;
use crate::controller::visibility::VisibleSections;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub visible: VisibleSections,
    pub on_navigate: Callback<Section>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let LandingProps { visible, on_navigate } = props;

    html! {
        <main class="landing">
            <Hero revealed={visible.is_visible(Section::Hero)} on_navigate={on_navigate.clone()} />
            <Origin revealed={visible.is_visible(Section::Origin)} />
            <Mission revealed={visible.is_visible(Section::Mission)} />
            <Build revealed={visible.is_visible(Section::Build)} />
            <Different revealed={visible.is_visible(Section::Different)} />
            <Gatherings revealed={visible.is_visible(Section::Gatherings)} />
            <Gain revealed={visible.is_visible(Section::Gain)} />
            <Join revealed={visible.is_visible(Section::Join)} />
            <Footer />
            <style>{LANDING_CSS}</style>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    revealed: bool,
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    revealed: bool,
    on_navigate: Callback<Section>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let revealed = props.revealed;

    html! {
        <section id={Section::Hero.id()} class="hero">
            <div class="hero-glow hero-glow-violet"></div>
            <div class="hero-glow hero-glow-gold"></div>

            <div class="hero-content">
                <Reveal revealed={revealed}>
                    <img src={images::LOGO} alt="Vox Pulchra Logo" class="hero-logo" />
                </Reveal>
                <Reveal revealed={revealed} delay_ms={200}>
                    <h1 class="hero-title">
                        {"Where Your Voice Becomes"}
                        <br />
                        <span class="text-gold-gradient">{"Who You Are Meant to Be"}</span>
                    </h1>
                </Reveal>
                <Reveal revealed={revealed} motion={Motion::Fade} delay_ms={300} class="centered">
                    <div class="divider-gold"></div>
                </Reveal>
                <Reveal revealed={revealed} delay_ms={400}>
                    <p class="hero-subtitle">
                        {"A faith-driven community raising confident, skilled, disciplined, and self-aware vocalists"}
                    </p>
                </Reveal>
                <Reveal revealed={revealed} delay_ms={500} class="hero-actions">
                    <button class="button-gold button-large" onclick={link_to(&props.on_navigate, Section::Join)}>
                        {"Join the Community"}
                    </button>
                    <button class="button-outline button-large" onclick={link_to(&props.on_navigate, Section::Origin)}>
                        {"Discover Our Story"}
                    </button>
                </Reveal>
            </div>

            <div class="hero-scroll-hint">
                <Icon glyph={Glyph::ChevronDown} />
            </div>
        </section>
    }
}

#[function_component(Origin)]
fn origin(props: &SectionProps) -> Html {
    let revealed = props.revealed;

    html! {
        <section id={Section::Origin.id()} class="section section-gradient">
            <div class="container two-columns">
                <Reveal revealed={revealed} motion={Motion::FromLeft}>
                    <div class="framed-image">
                        <div class="framed-image-glow"></div>
                        <img src={images::FOUNDER} alt="Founder of Vox Pulchra" />
                    </div>
                </Reveal>
                <Reveal revealed={revealed} motion={Motion::FromRight} delay_ms={200}>
                    <p class="eyebrow">{"Our Origin"}</p>
                    <h2>{"The Question That Changed Everything"}</h2>
                    <div class="divider-gold"></div>
                    <div class="story">
                        <p class="story-lead">{"\"There comes a moment in every singer's life when the question shifts."}</p>
                        <p>
                            {"It is no longer, "}<span class="gold">{"\"Can I sing?\""}</span>
                            <br />
                            {"It becomes, "}<span class="gold">{"\"What is my voice truly for?\""}</span>
                        </p>
                        <p>
                            {"Your voice is more than sound. It is identity. It is responsibility. It is influence. It carries emotion, conviction, and belief."}
                        </p>
                        <p>
                            <span class="cream">{"Vox Pulchra"}</span>
                            {" — meaning "}
                            <em>{"Beautiful Voice"}</em>
                            {" — was born from this understanding."}
                        </p>
                        <p>
                            {"I founded Vox Pulchra because I saw something missing. Many singers have talent. Few have structure. Many have passion. Few have discipline. Many can perform. Few understand their voice deeply — both technically and spiritually."}
                        </p>
                        <p class="story-close">
                            {"Vox Pulchra is not just a singing group. It is a faith-driven community raising confident, skilled, disciplined, and self-aware vocalists."}
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Mission)]
fn mission(props: &SectionProps) -> Html {
    let revealed = props.revealed;

    html! {
        <section id={Section::Mission.id()} class="section mission">
            <div class="mission-shade"></div>
            <div class="container narrow">
                <Reveal revealed={revealed} class="section-heading">
                    <p class="eyebrow">{"Our Purpose"}</p>
                    <h2>{"Our Mission"}</h2>
                    <div class="divider-gold"></div>
                </Reveal>
                <Reveal revealed={revealed} delay_ms={200}>
                    <div class="panel">
                        <p class="mission-statement">
                            {"To raise vocalists who are "}
                            <span class="gold">{"technically excellent"}</span>{", "}
                            <span class="gold">{"spiritually grounded"}</span>{", "}
                            <span class="gold">{"emotionally intelligent"}</span>{", and "}
                            <span class="gold">{"personally disciplined"}</span>
                            {" — singers who understand that their voice is both a gift and a calling."}
                        </p>
                        <div class="grid grid-3">
                            { for MISSION_VALUES.iter().map(|value| html! {
                                <div class="value" key={value.title}>
                                    <div class="icon-badge icon-badge-round">
                                        <Icon glyph={value.glyph} />
                                    </div>
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Build)]
fn build(props: &SectionProps) -> Html {
    let revealed = props.revealed;

    html! {
        <section id={Section::Build.id()} class="section section-gradient">
            <div class="container">
                <Reveal revealed={revealed} class="section-heading">
                    <p class="eyebrow">{"Foundations"}</p>
                    <h2>{"What We Build Here"}</h2>
                    <div class="divider-gold"></div>
                </Reveal>
                <div class="grid grid-3">
                    { for OFFERINGS.iter().enumerate().map(|(index, offering)| html! {
                        <Reveal revealed={revealed} delay_ms={stagger_delay(index)} class="card card-lift" key={offering.title}>
                            <div class="icon-badge">
                                <Icon glyph={offering.glyph} />
                            </div>
                            <h3>{offering.title}</h3>
                            <p>{offering.description}</p>
                        </Reveal>
                    }) }
                </div>
                <Reveal revealed={revealed} delay_ms={700} class="closing-line">
                    <p>{"We are intentional. We take growth seriously. And we respect the process."}</p>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Different)]
fn different(props: &SectionProps) -> Html {
    let revealed = props.revealed;

    html! {
        <section id={Section::Different.id()} class="section">
            <div class="container two-columns">
                <Reveal revealed={revealed} motion={Motion::FromLeft}>
                    <p class="eyebrow">{"Our Approach"}</p>
                    <h2>{"What Makes Vox Pulchra Different"}</h2>
                    <div class="divider-gold"></div>
                    <p class="lead">
                        {"We are not building performers. We are building "}
                        <span class="gold">{"voices that carry weight"}</span>{"."}
                    </p>
                    <p class="muted">
                        {"Here, we do not chase trends. We pursue depth. We ask better questions. We confront weaknesses. We refine strengths. We value consistency over noise."}
                    </p>
                    <p class="muted">
                        {"In a world that rewards visibility, Vox Pulchra rewards "}
                        <span class="cream">{"development"}</span>{"."}
                    </p>
                    <div class="card safe-space">
                        <p class="cream">{"This is a space where you can:"}</p>
                        <ul>
                            { for SAFE_SPACE.iter().map(|item| html! {
                                <li key={*item}><span class="dot"></span>{*item}</li>
                            }) }
                        </ul>
                    </div>
                    <p class="closing-italic">
                        {"We understand that technique matters. But so does identity. And when both align, something powerful happens."}
                    </p>
                </Reveal>
                <Reveal revealed={revealed} motion={Motion::FromRight} delay_ms={200}>
                    <div class="pillars">
                        { for PILLARS.iter().enumerate().map(|(index, pillar)| html! {
                            <div class={classes!("panel", "pillar", pillar.indented.then_some("indented"))} key={pillar.title}>
                                <div class="pillar-number">{ordinal(index)}</div>
                                <h3>{pillar.title}</h3>
                                <p>{pillar.description}</p>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Gatherings)]
fn gatherings(props: &SectionProps) -> Html {
    let revealed = props.revealed;

    html! {
        <section id={Section::Gatherings.id()} class="section section-gradient">
            <div class="container">
                <Reveal revealed={revealed} class="section-heading">
                    <p class="eyebrow">{"Our Rhythm"}</p>
                    <h2>{"Our Gatherings"}</h2>
                    <div class="divider-gold"></div>
                    <p class="muted">{"Every structure shapes growth. That is why we meet intentionally."}</p>
                </Reveal>
                <div class="grid grid-2">
                    { for GATHERINGS.iter().enumerate().map(|(index, gathering)| html! {
                        <Reveal revealed={revealed} delay_ms={200 * (index as u32 + 1)} key={gathering.title}>
                            <div class="gathering">
                                <div class="gathering-image">
                                    <img src={gathering.image} alt={gathering.title} />
                                </div>
                                <div class="gathering-shade"></div>
                                <div class="gathering-body">
                                    <div class="gathering-schedule">
                                        <Icon glyph={Glyph::Calendar} class="icon-small" />
                                        {gathering.schedule}
                                    </div>
                                    <h3>{gathering.title}</h3>
                                    <p>{gathering.description}</p>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
                <Reveal revealed={revealed} delay_ms={600} class="closing-line">
                    <p>{"Together, these rhythms form a system of growth — spiritual and practical."}</p>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Gain)]
fn gain(props: &SectionProps) -> Html {
    let revealed = props.revealed;

    html! {
        <section id={Section::Gain.id()} class="section">
            <div class="container">
                <Reveal revealed={revealed} class="section-heading">
                    <p class="eyebrow">{"The Journey"}</p>
                    <h2>{"What You Gain"}</h2>
                    <div class="divider-gold"></div>
                    <p class="muted">{"When you join Vox Pulchra, you gain more than access. You gain transformation."}</p>
                </Reveal>
                <div class="grid grid-3">
                    { for BENEFITS.iter().enumerate().map(|(index, benefit)| html! {
                        <Reveal revealed={revealed} delay_ms={stagger_delay(index)} class="card card-panel" key={benefit.title}>
                            <div class="number-badge">{ordinal(index)}</div>
                            <h3>{benefit.title}</h3>
                            <p>{benefit.description}</p>
                        </Reveal>
                    }) }
                </div>
                <Reveal revealed={revealed} delay_ms={700} class="closing-banner">
                    <p class="banner-lead">{"You become part of something intentional."}</p>
                    <p class="muted">
                        {"Not loud. Not shallow. Not temporary."}
                        <br />
                        <span class="gold strong">{"But formative."}</span>
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Join)]
fn join(props: &SectionProps) -> Html {
    let revealed = props.revealed;

    html! {
        <section id={Section::Join.id()} class="section section-gradient join">
            <div class="join-glow"></div>
            <div class="container narrow">
                <Reveal revealed={revealed} class="join-content">
                    <p class="eyebrow">{"The Invitation"}</p>
                    <h2>{"If You Know You Are Called to More"}</h2>
                    <div class="divider-gold"></div>

                    <div class="invitations">
                        { for INVITATIONS.iter().map(|line| html! { <p key={*line}>{*line}</p> }) }
                    </div>

                    <div class="panel join-panel">
                        <p class="lead">{"Then this is for you."}</p>
                        <p class="muted">
                            {"Vox Pulchra is not for everyone. It is for the vocalist who is ready to grow — patiently, intentionally, and wholeheartedly."}
                        </p>

                        <div class="join-actions">
                            <a href={contact::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="button-gold button-large">
                                <Icon glyph={Glyph::Phone} />
                                {"Join via WhatsApp"}
                            </a>
                            <a href={contact::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="button-outline button-large">
                                <Icon glyph={Glyph::Instagram} />
                                {"Follow on Instagram"}
                            </a>
                        </div>

                        <div class="join-contacts">
                            <a href={contact::PHONE_TEL}>
                                <Icon glyph={Glyph::Phone} class="icon-small" />
                                {contact::PHONE_DISPLAY}
                            </a>
                            <span class="separator">{"|"}</span>
                            <a href={contact::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                                <Icon glyph={Glyph::Instagram} class="icon-small" />
                                {contact::INSTAGRAM_HANDLE}
                            </a>
                        </div>
                    </div>

                    <div class="manifesto">
                        <p class="closing-italic">{"This is the beginning of a movement."}</p>
                        <p class="muted">
                            {"Not of noise, but of refinement."}
                            <br />
                            {"Not of hype, but of substance."}
                        </p>
                        <p class="manifesto-close">
                            {"Your voice is "}<span class="gold">{"beautiful"}</span>{"."}
                            <br />
                            {"Now it is time to "}<span class="gold">{"build it"}</span>{"."}
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-row">
                    <img src={images::LOGO} alt="Vox Pulchra" class="footer-logo" />
                    <div class="footer-social">
                        <a href={contact::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                            <Icon glyph={Glyph::Instagram} />
                        </a>
                        <a href={contact::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" aria-label="WhatsApp">
                            <Icon glyph={Glyph::Phone} />
                        </a>
                    </div>
                    <p class="footer-copyright">{format!("© {} Vox Pulchra. Beautiful Voice.", year)}</p>
                </div>
                <div class="footer-quote">
                    <p>{"\"Join Vox Pulchra. Become the voice you were meant to steward.\""}</p>
                </div>
            </div>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --background: hsl(260, 30%, 8%);
        --surface: hsl(260, 25%, 12%);
        --panel-from: hsl(260, 25%, 15%);
        --panel-to: hsl(260, 25%, 10%);
        --gold: hsl(43, 70%, 55%);
        --gold-light: hsl(43, 70%, 65%);
        --violet: hsl(270, 50%, 35%);
        --cream: hsl(40, 40%, 92%);
        --muted: hsl(260, 10%, 65%);
    }
    * {
        box-sizing: border-box;
    }
    body {
        margin: 0;
        background: var(--background);
        color: var(--cream);
        font-family: "Cormorant Garamond", Georgia, serif;
        overflow-x: hidden;
    }
    html {
        scroll-behavior: smooth;
    }
    .landing {
        min-height: 100vh;
        overflow-x: hidden;
    }
    .container {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        position: relative;
        z-index: 1;
    }
    .container.narrow {
        max-width: 64rem;
    }
    .section {
        padding: 6rem 0;
        position: relative;
        overflow: hidden;
    }
    .section-gradient {
        background: linear-gradient(180deg, var(--background) 0%, hsl(260, 28%, 11%) 50%, var(--background) 100%);
    }
    .section h2 {
        font-size: clamp(2rem, 4vw, 3.5rem);
        font-weight: 300;
        margin: 0 0 1.5rem;
    }
    .section h3 {
        font-size: 1.2rem;
        font-weight: 500;
        margin: 0 0 0.5rem;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading .divider-gold {
        margin: 0 auto 1.5rem;
    }
    .section-heading .muted {
        max-width: 42rem;
        margin: 0 auto;
    }
    .eyebrow {
        color: var(--gold);
        font-size: 0.85rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        margin-bottom: 1rem;
    }
    .divider-gold {
        width: 6rem;
        height: 1px;
        background: linear-gradient(90deg, transparent, var(--gold), transparent);
        margin-bottom: 2rem;
    }
    .gold {
        color: var(--gold);
    }
    .gold.strong {
        font-weight: 500;
    }
    .cream {
        color: var(--cream);
    }
    .muted, .card p, .value p, .pillar p {
        color: var(--muted);
        line-height: 1.7;
    }
    .lead {
        font-size: 1.3rem;
        color: var(--cream);
    }
    .closing-italic, .closing-line p {
        font-style: italic;
        color: hsla(40, 40%, 92%, 0.8);
        font-size: 1.15rem;
    }
    .closing-line {
        margin-top: 3rem;
        text-align: center;
    }
    .text-gold-gradient {
        background: linear-gradient(135deg, var(--gold), var(--gold-light), var(--gold));
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }

    /* reveal */
    .reveal {
        transition: opacity 1s ease, transform 1s ease;
        opacity: 0;
    }
    .reveal-rise {
        transform: translateY(2rem);
    }
    .reveal-left {
        transform: translateX(-3rem);
    }
    .reveal-right {
        transform: translateX(3rem);
    }
    .reveal.revealed {
        opacity: 1;
        transform: none;
    }
    .centered {
        display: flex;
        justify-content: center;
    }

    /* buttons */
    .button-gold, .button-outline {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        border-radius: 0.5rem;
        padding: 0.6rem 1.2rem;
        font: inherit;
        font-weight: 500;
        cursor: pointer;
        text-decoration: none;
        transition: background 0.3s ease, color 0.3s ease;
    }
    .button-gold {
        background: var(--gold);
        color: var(--background);
        border: none;
    }
    .button-gold:hover {
        background: var(--gold-light);
    }
    .button-outline {
        background: transparent;
        color: var(--gold);
        border: 1px solid hsla(43, 70%, 55%, 0.4);
    }
    .button-outline:hover {
        background: hsla(43, 70%, 55%, 0.1);
    }
    .button-large {
        padding: 0.85rem 2rem;
        font-size: 1.05rem;
    }

    /* hero */
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        background: radial-gradient(ellipse at top, hsl(270, 40%, 18%) 0%, var(--background) 70%);
    }
    .hero-glow {
        position: absolute;
        border-radius: 50%;
        filter: blur(64px);
    }
    .hero-glow-violet {
        top: 25%;
        left: 25%;
        width: 24rem;
        height: 24rem;
        background: hsla(270, 50%, 35%, 0.2);
    }
    .hero-glow-gold {
        bottom: 25%;
        right: 25%;
        width: 20rem;
        height: 20rem;
        background: hsla(43, 70%, 55%, 0.1);
    }
    .hero-content {
        position: relative;
        z-index: 1;
        max-width: 64rem;
        padding: 5rem 1.5rem 0;
        text-align: center;
    }
    .hero-logo {
        height: 10rem;
        width: auto;
        margin-bottom: 2rem;
    }
    .hero-title {
        font-size: clamp(2.25rem, 6vw, 4.5rem);
        font-weight: 300;
        font-style: italic;
        margin: 0 0 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: var(--muted);
        max-width: 42rem;
        margin: 0 auto 3rem;
        line-height: 1.7;
    }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: center;
    }
    .hero-scroll-hint {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        color: hsla(43, 70%, 55%, 0.6);
        animation: bounce 1s infinite;
    }
    @keyframes bounce {
        0%, 100% { transform: translate(-50%, -25%); }
        50% { transform: translate(-50%, 0); }
    }

    /* layout */
    .two-columns {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 5rem;
        align-items: center;
    }
    .grid {
        display: grid;
        gap: 1.5rem;
    }
    .grid-2 {
        grid-template-columns: repeat(2, 1fr);
        gap: 2rem;
    }
    .grid-3 {
        grid-template-columns: repeat(3, 1fr);
    }

    /* origin */
    .framed-image {
        position: relative;
    }
    .framed-image-glow {
        position: absolute;
        inset: -1rem;
        background: linear-gradient(135deg, hsla(43, 70%, 55%, 0.2), hsla(270, 50%, 35%, 0.2));
        border-radius: 1rem;
        filter: blur(24px);
    }
    .framed-image img {
        position: relative;
        display: block;
        width: 100%;
        max-width: 28rem;
        margin: 0 auto;
        border-radius: 0.75rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    }
    .story p {
        color: var(--muted);
        line-height: 1.8;
        margin: 0 0 1.5rem;
    }
    .story .story-lead {
        font-size: 1.15rem;
        font-style: italic;
        color: hsla(40, 40%, 92%, 0.9);
    }
    .story .story-close {
        color: hsla(40, 40%, 92%, 0.9);
        font-weight: 500;
    }

    /* panels and cards */
    .panel {
        background: linear-gradient(135deg, var(--panel-from), var(--panel-to));
        border: 1px solid hsla(43, 70%, 55%, 0.2);
        border-radius: 1rem;
        padding: 3rem;
    }
    .card {
        background: var(--surface);
        border: 1px solid hsla(43, 70%, 55%, 0.1);
        border-radius: 0.75rem;
        padding: 1.5rem;
    }
    .card-panel {
        background: linear-gradient(135deg, var(--panel-from), var(--panel-to));
    }
    .card-lift:hover {
        border-color: hsla(43, 70%, 55%, 0.4);
        transform: translateY(-0.25rem);
    }
    .icon {
        width: 1.5rem;
        height: 1.5rem;
        flex-shrink: 0;
    }
    .icon-small {
        width: 1rem;
        height: 1rem;
    }
    .icon-badge {
        width: 3rem;
        height: 3rem;
        border-radius: 0.5rem;
        background: hsla(43, 70%, 55%, 0.1);
        color: var(--gold);
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1rem;
    }
    .icon-badge-round {
        width: 4rem;
        height: 4rem;
        border-radius: 50%;
        margin: 0 auto 1rem;
    }
    .icon-badge-round .icon {
        width: 2rem;
        height: 2rem;
    }
    .number-badge {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        background: hsla(43, 70%, 55%, 0.1);
        color: var(--gold);
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1rem;
    }

    /* mission */
    .mission-shade {
        position: absolute;
        top: 0;
        right: 0;
        width: 50%;
        height: 100%;
        background: linear-gradient(to left, hsla(270, 50%, 20%, 0.3), transparent);
    }
    .mission-statement {
        font-size: 1.5rem;
        line-height: 1.7;
        text-align: center;
        color: hsla(40, 40%, 92%, 0.9);
        margin-bottom: 2rem;
    }
    .value {
        text-align: center;
        margin-top: 1.5rem;
    }

    /* different */
    .safe-space {
        margin: 2rem 0;
        border-color: hsla(43, 70%, 55%, 0.2);
    }
    .safe-space ul {
        list-style: none;
        padding: 0;
        margin: 1rem 0 0;
    }
    .safe-space li {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: var(--muted);
        margin-bottom: 0.75rem;
    }
    .dot {
        width: 0.375rem;
        height: 0.375rem;
        border-radius: 50%;
        background: var(--gold);
    }
    .pillars {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .pillar {
        padding: 2rem;
    }
    .pillar.indented {
        margin-left: 2rem;
    }
    .pillar-number {
        font-size: 3rem;
        font-weight: 300;
        color: var(--gold);
        margin-bottom: 0.5rem;
    }

    /* gatherings */
    .gathering {
        position: relative;
        overflow: hidden;
        border-radius: 1rem;
        border: 1px solid hsla(43, 70%, 55%, 0.2);
    }
    .gathering-image {
        aspect-ratio: 4 / 3;
        overflow: hidden;
    }
    .gathering-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s ease;
    }
    .gathering:hover .gathering-image img {
        transform: scale(1.05);
    }
    .gathering-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, var(--background), hsla(260, 30%, 8%, 0.5), transparent);
    }
    .gathering-body {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        padding: 1.5rem;
    }
    .gathering-body h3 {
        font-size: 1.5rem;
    }
    .gathering-body p {
        color: var(--muted);
        font-size: 0.95rem;
        line-height: 1.6;
    }
    .gathering-schedule {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: var(--gold);
        font-size: 0.9rem;
        margin-bottom: 0.5rem;
    }

    /* gain */
    .closing-banner {
        margin-top: 4rem;
        text-align: center;
        border-radius: 1rem;
        padding: 3rem;
        background: linear-gradient(90deg, hsla(43, 70%, 55%, 0.1), hsla(43, 70%, 55%, 0.2), hsla(43, 70%, 55%, 0.1));
    }
    .banner-lead {
        font-size: 1.5rem;
        font-weight: 300;
        font-style: italic;
        margin-bottom: 1rem;
    }

    /* join */
    .join-glow {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 50rem;
        height: 50rem;
        transform: translate(-50%, -50%);
        border-radius: 50%;
        background: hsla(43, 70%, 55%, 0.05);
        filter: blur(64px);
    }
    .join-content {
        text-align: center;
    }
    .join-content .divider-gold {
        margin: 0 auto 2rem;
    }
    .invitations {
        font-size: 1.15rem;
        color: var(--muted);
        margin-bottom: 3rem;
    }
    .join-panel {
        margin-bottom: 3rem;
    }
    .join-actions {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
        margin: 2rem 0;
    }
    .join-contacts {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        font-size: 0.9rem;
    }
    .join-contacts a, .footer-social a {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        color: var(--muted);
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .join-contacts a:hover, .footer-social a:hover {
        color: var(--gold);
    }
    .separator {
        color: hsla(43, 70%, 55%, 0.4);
    }
    .manifesto-close {
        font-size: 1.9rem;
        font-weight: 300;
        margin-top: 2rem;
    }

    /* footer */
    .footer {
        padding: 3rem 0;
        background: hsl(260, 35%, 6%);
        border-top: 1px solid hsla(43, 70%, 55%, 0.1);
    }
    .footer-row {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1.5rem;
    }
    .footer-logo {
        height: 3rem;
        width: auto;
    }
    .footer-social {
        display: flex;
        gap: 1.5rem;
    }
    .footer-copyright {
        color: var(--muted);
        font-size: 0.9rem;
    }
    .footer-quote {
        margin-top: 2rem;
        padding-top: 2rem;
        border-top: 1px solid hsla(43, 70%, 55%, 0.1);
        text-align: center;
        color: hsla(40, 40%, 92%, 0.6);
        font-style: italic;
        font-size: 1.15rem;
    }

    @media (max-width: 1024px) {
        .two-columns {
            grid-template-columns: 1fr;
            gap: 3rem;
        }
        .grid-3 {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .grid-2, .grid-3 {
            grid-template-columns: 1fr;
        }
        .panel, .closing-banner {
            padding: 2rem;
        }
        .footer-row {
            flex-direction: column;
        }
        .hero-logo {
            height: 8rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_LINKS;
    use yew::LocalServerRenderer;

    async fn render(visible: VisibleSections) -> String {
        let props = LandingProps {
            visible,
            on_navigate: Callback::from(|_: Section| ()),
        };
        LocalServerRenderer::<Landing>::with_props(props).render().await
    }

    #[tokio::test]
    async fn every_section_is_rendered_with_its_id() {
        let local = tokio::task::LocalSet::new();
        let html = local.run_until(render(VisibleSections::new())).await;

        for section in Section::ALL {
            let anchor = format!("id=\"{}\"", section.id());
            assert!(html.contains(&anchor), "missing {}", anchor);
        }
        for link in NAV_LINKS.iter() {
            assert!(html.contains(&format!("id=\"{}\"", link.target.id())));
        }
    }

    #[tokio::test]
    async fn hidden_until_revealed() {
        let local = tokio::task::LocalSet::new();
        let hidden = local.run_until(render(VisibleSections::new())).await;
        assert!(hidden.contains("reveal reveal-rise"));
        assert!(!hidden.contains("reveal-rise revealed"));

        let mut visible = VisibleSections::new();
        visible.reveal_all();
        let shown = local.run_until(render(visible)).await;
        assert!(shown.contains("reveal reveal-rise revealed"));
    }
}
