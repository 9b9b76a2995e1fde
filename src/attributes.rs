/// Standard HTML attributes offered behind `x-bind:` and the `:` shorthand.
/// `belongs_to` restricts an attribute to the listed elements; empty means any.
#[derive(Debug, Clone, Copy)]
pub struct Attribute {
    pub name: &'static str,
    pub documentation: &'static str,
    pub belongs_to: &'static [&'static str],
    pub deprecated: bool,
}

const fn attr(name: &'static str, documentation: &'static str) -> Attribute {
    Attribute {
        name,
        documentation,
        belongs_to: &[],
        deprecated: false,
    }
}

const fn attr_of(
    name: &'static str,
    documentation: &'static str,
    belongs_to: &'static [&'static str],
) -> Attribute {
    Attribute {
        name,
        documentation,
        belongs_to,
        deprecated: false,
    }
}

const fn deprecated(name: &'static str, documentation: &'static str) -> Attribute {
    Attribute {
        name,
        documentation,
        belongs_to: &[],
        deprecated: true,
    }
}

pub const ATTRIBUTES: &[Attribute] = &[
    attr_of("accept", "This attribute can be used with <input> element only.", &["input"]),
    attr_of("accept-charset", "Define character encoding and is used for form submission.", &["form"]),
    attr("accesskey", "The keyboard shortcuts to activate/focus specific elements."),
    attr_of("action", "Specify where the form data is to be sent to the server after submission of the form.", &["form"]),
    deprecated("align", "Specify the alignment of text content of The Element."),
    attr_of("alt", "Show or display something if the primary attribute", &["img", "area", "input"]),
    attr_of("async", "Only works for external scripts (and used only in when src attribute is present ).", &["script"]),
    attr_of("autocomplete", "Specify whether the input field has autocompleted would be on or off.", &["input", "form"]),
    attr_of("autoplay", "The audio/video should automatically start playing when web page is loaded.", &["audio", "video"]),
    attr_of("autofocus", "The element should get focused when the page loads. It is a boolean attribute.", &["input", "button", "select", "textarea"]),
    attr("bgcolor", "Set the background color of an HTML element."),
    attr("border", "Set visible border width to most HTML elements within the body."),
    attr("charset", "Define character encoding."),
    attr("checked", "Indicate whether an element should be checked when the page loads up. It is a Boolean attribute."),
    attr("cite", "Specify the URL of the document that explains the quotes, message or text which describes why the text was inserted."),
    attr("class", "Specifies one or more class names for an HTML element."),
    attr("cols", "The number of columns a cell should span."),
    attr("colspan", "HTML specifies the number of columns a cell should span."),
    attr("content", "The values that are related to the http-equiv or name attribute."),
    attr("contenteditable", "Specify whether the content present in the element is editable or not."),
    attr("controls", "It is a Boolean attribute and also new in HTML5"),
    attr("coords", "Specify the coordinate of an area in an image-map"),
    attr("data", "Specify the URL of the Embedded file of the Object."),
    attr("data-*", "Specific to HTML5 and you can use the data-* attribute on all HTML elements."),
    attr("datetime", "Specify the date and time of the inserted and the deleted text."),
    attr("default", "Specify that the track will be enabled if the user's preferences do not indicate that another track would be more appropriate."),
    attr("defer", "Executed when the page has finished parsing."),
    attr("dir", "The text direction of the element content."),
    attr("dirname", "Enable the text direction of the input and the Textarea Field after submitting the form."),
    attr("disabled", "The disabled attribute in HTML indicates whether the element is disabled or not."),
    attr("download", "Download the element when the user clicks on the hyperlink"),
    attr("draggable", "Specify whether an element is draggable or not."),
    attr("dropzone", "Specify whether the dragged data is copied, moved, or linked when it is dropped on any element."),
    attr("enctype", "That data will be present in the form and should be encoded when submitted to the server."),
    attr("for", "For Attribute is used in both the <label> and the <output> element."),
    attr("form", "That the element can contain one or more forms"),
    attr("formaction", "Specify where to send the data of the form. After submission of the form, the formaction attribute is called."),
    attr("headers", "The HTML headers attribute specifies one or additional header cells a table cell is expounded to."),
    attr("height", "height attribute is used to specify the height of the Element."),
    attr("hidden", "The hidden attribute in HTML is used to define the visibility of elements."),
    attr("high", "The range where the value of gauge is considered to be of high value."),
    attr("href", "It is used to specify the URL of the document."),
    attr("hreflang", "The language for a linked document. It is used only when the href attribute is set."),
    attr("http-equiv", "Provide header information or value of the content Attribute."),
    attr("id", "It is used by CSS and JavaScript to perform a certain task for a unique element."),
    attr("ismap", "The HTML ismap attribute is a boolean attribute."),
    attr_of("kind", "The kind of track. This attribute is only used in <Track> element.", &["track"]),
    attr("label", "The title of the Text Track is used by the browser when listing available text tracks."),
    attr("lang", "Specify the language of the element content."),
    attr_of("list", "List of pre-defined options for an <input> element to suggest the user.", &["input"]),
    attr("loop", "Restart the audio and video again and again after finishing it. It contains the Boolean value."),
    attr("low", "The range where the value of gauge is considered to be low."),
    attr("max", "Specifies the maximum value of an element."),
    attr_of("maxlength", "The maximum number of characters in the <input> element. Its default value is 524288.", &["input"]),
    attr("media", "The media attribute is used with the <link> and <style> elements to specify the type of media (screen, print, etc.) the document is optimized for."),
    attr_of("method", "The HTTP method is used to send data while submitting the form.", &["form"]),
    attr("min", "Specify the lower bound of the gauge."),
    attr("multiple", "Allowed to select more than one value that is present in an element."),
    attr("muted", "The audio output of the video is muted, it is a Boolean attribute."),
    attr("name", "Specify a name for the element."),
    attr_of("novalidate", "That the form-data should not be validated when submitting the form.", &["form"]),
    attr("onblur", "That moment when the element loses focus."),
    attr("oncopy", "The user copied the content present in an element."),
    attr("oncut", "The user cut or delete the content that has been present in the element."),
    attr("onkeypress", "when a user presses a key on the Keyboard."),
    attr("onmousedown", "Order of events occurs related to the onmousedown event."),
    attr("onscroll", "This onscroll attribute works when an element scrollbar is being scrolled."),
    attr("optimum", "The optimum attribute in HTML indicates the optimal numeric value for the gauge."),
    attr("pattern", "Specifies a regular expression pattern that the input value must match to be valid."),
    attr("placeholder", "Specifies a short hint that describes the expected value of an input field/text area."),
    attr("readonly", "Specify that the text written in input or text area Element is read-only."),
    attr("required", "Specify that the input element must be filled out before submitting the Form."),
    attr("reversed", "Ordered the list in Descending Order(9, 8, 7, 6 .....) instead of ascending order(1, 2, 3 ....)"),
    attr("rows", "The number of visible text lines for the control i.e the number of rows to display."),
    attr("rowspan", "The number of rows a cell should span."),
    attr("selected", "Specify which option should be by default selected when the page loads."),
    attr("size", "Specify the initial width for the input field and a number of visible rows for the select element."),
    attr("spellcheck", "Applied to HTML forms using the spellcheck attribute."),
    attr("srclang", "Specify the language of the track text."),
    attr("start", "The start value for numbering the individual list item."),
    attr_of("step", "Set the discrete step size of the <input> element.", &["input"]),
    attr("style", "There are 3 ways of implementing style in HTML."),
    attr("tabindex", "When the tab button is used for navigating."),
    attr("target", "Specifies where to open the linked document (e.g., in a new window/tab, in the same window/tab, etc.)."),
    attr("title", "Specify extra information about the element."),
    attr("translate", "Specify whether the content of an element is translated or not."),
    attr("value", "Specify the value of the element with which it is used."),
    attr_of("wrap", "The wrap attribute specifies how text should be wrapped in a <textarea> element (either by spaces or by the browser's default). It determines how text is handled when the form is submitted.", &["textarea"]),
];
